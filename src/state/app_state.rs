//! Application state definitions

use super::{ContactForm, FeedbackPresenter};
use crate::content::{ContentRenderer, Profile};

/// Page section shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    About,
    Projects,
    Contact,
}

impl View {
    /// Sections in navigation order
    pub const ALL: [View; 3] = [Self::About, Self::Projects, Self::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::About => 0,
            Self::Projects => 1,
            Self::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// Color scheme, kept for the session only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub theme: Theme,

    // Content (read-only after startup)
    pub profile: Profile,
    pub gallery: ContentRenderer,

    // Gallery selection
    pub selected_index: usize,
    pub scroll_offset: usize,

    // About section scroll (rows)
    pub about_scroll: u16,

    // Contact form and its notifications
    pub contact: ContactForm,
    pub feedback: FeedbackPresenter,

    // Whether the dispatcher has a complete configuration
    pub dispatch_ready: bool,
}

impl AppState {
    pub fn new(profile: Profile, gallery: ContentRenderer, dispatch_ready: bool) -> Self {
        let feedback = FeedbackPresenter::new(profile.email.clone());
        Self {
            profile,
            gallery,
            feedback,
            dispatch_ready,
            ..Default::default()
        }
    }

    /// Apply a form transition
    pub fn update_contact(&mut self, update: impl FnOnce(ContactForm) -> ContactForm) {
        let form = std::mem::take(&mut self.contact);
        self.contact = update(form);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Move selection left in grid
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right in grid
    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Move selection up in grid (by one row)
    pub fn move_selection_up_grid(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection down in grid (by one row)
    pub fn move_selection_down_grid(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        } else {
            // Past the end: land on the last row, same column or last item
            let current_row = self.selected_index / columns;
            let last_row = (total - 1) / columns;
            if current_row < last_row {
                let target_col = self.selected_index % columns;
                let potential_target = last_row * columns + target_col;
                self.selected_index = potential_target.min(total - 1);
            }
        }
    }

    /// Keep the selected row inside a window of `visible_rows` rows
    pub fn ensure_selection_visible(&mut self, columns: usize, visible_rows: usize) {
        if columns == 0 || visible_rows == 0 {
            return;
        }
        let row = self.selected_index / columns;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible_rows {
            self.scroll_offset = row + 1 - visible_rows;
        }
    }

    pub fn scroll_about_down(&mut self, max_scroll: u16) {
        self.about_scroll = (self.about_scroll + 1).min(max_scroll);
    }

    pub fn scroll_about_up(&mut self) {
        self.about_scroll = self.about_scroll.saturating_sub(1);
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}
