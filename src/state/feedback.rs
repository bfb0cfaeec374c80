//! Transient toast notifications for submit outcomes

use crate::dispatch::{DispatchError, DispatchResult};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Oldest toasts are dropped beyond this many
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

/// One notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub shown_at: Instant,
    pub duration: Duration,
    /// Can be closed before it expires
    pub closable: bool,
}

impl Toast {
    /// Slide-in duration
    const ANIMATION_DURATION: Duration = Duration::from_millis(250);

    fn new(kind: ToastKind, title: &str, description: String, now: Instant) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            shown_at: now,
            duration: TOAST_DURATION,
            closable: true,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    /// Slide-in progress from 0.0 to 1.0 (cubic ease-out)
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed >= Self::ANIMATION_DURATION {
            return 1.0;
        }
        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide_progress(now) < 1.0
    }
}

/// Turns dispatch results into toasts and expires them.
///
/// Purely visual: nothing here blocks input or another submit.
#[derive(Debug, Default)]
pub struct FeedbackPresenter {
    toasts: Vec<Toast>,
    /// Address quoted when a message could not be sent
    fallback_email: Option<String>,
}

impl FeedbackPresenter {
    pub fn new(fallback_email: Option<String>) -> Self {
        Self {
            toasts: Vec::new(),
            fallback_email,
        }
    }

    pub fn present(&mut self, result: &DispatchResult) {
        self.present_at(result, Instant::now());
    }

    pub fn present_at(&mut self, result: &DispatchResult, now: Instant) {
        let toast = match result {
            Ok(()) => Toast::new(
                ToastKind::Success,
                "Message sent",
                "I'll get back to you soon.".to_string(),
                now,
            ),
            Err(DispatchError::Validation(fields)) => {
                let labels: Vec<_> = fields.iter().map(|f| f.label()).collect();
                Toast::new(
                    ToastKind::Warning,
                    "Missing information",
                    format!("Please fill in: {}.", labels.join(", ")),
                    now,
                )
            }
            Err(_) => {
                let mut description =
                    "Could not send message. Please use the email address in the footer."
                        .to_string();
                if let Some(email) = &self.fallback_email {
                    description.push_str(&format!(" ({email})"));
                }
                Toast::new(ToastKind::Error, "Failed", description, now)
            }
        };

        self.toasts.push(toast);
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    /// Drop expired toasts. Returns true when something was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Close the newest closable toast
    pub fn dismiss_latest(&mut self) -> bool {
        match self.toasts.iter().rposition(|t| t.closable) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Visible toasts, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.toasts.iter().any(|t| t.is_animating(now))
    }
}
