//! Application state and core logic

use crate::config::TuiConfig;
use crate::content::{ActionKind, ContentRenderer, ContentSource, Profile};
use crate::dispatch::{DispatchError, DispatchResult, EmailJsClient, SubmissionDispatcher};
use crate::platform::SEND_MODIFIER;
use crate::state::{AppState, ContactForm, Form, View};
use crate::ui::{self, GridLayout};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Sections kept in the back-navigation history
const MAX_HISTORY: usize = 16;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sends contact form snapshots to the notification service
    dispatcher: SubmissionDispatcher,
    /// Results of background dispatch tasks
    dispatch_tx: mpsc::UnboundedSender<DispatchResult>,
    dispatch_rx: mpsc::UnboundedReceiver<DispatchResult>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance from configuration and bundled content
    pub fn new() -> Result<Self> {
        let config = TuiConfig::resolve()?;

        let source = ContentSource::load(config.projects_path.as_deref())?;
        let gallery = ContentRenderer::new(&source);
        let profile = Profile::bundled()?;

        let transport = Arc::new(EmailJsClient::new()?);
        let dispatcher = SubmissionDispatcher::new(config.dispatch_config(), transport);

        let state = AppState::new(profile, gallery, dispatcher.is_configured());
        Ok(Self::with_parts(state, dispatcher))
    }

    pub fn with_parts(state: AppState, dispatcher: SubmissionDispatcher) -> Self {
        let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel();
        Self {
            state,
            dispatcher,
            dispatch_tx,
            dispatch_rx,
            quit: false,
            copy_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the next frame should come sooner than the idle poll
    pub fn is_animating(&self) -> bool {
        self.state.contact.is_submitting()
            || self.state.contact.is_sent()
            || self.state.feedback.is_animating(Instant::now())
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    fn main_area(&self) -> Rect {
        ui::create_layout(self.screen_area()).1
    }

    fn sidebar_area(&self) -> Rect {
        ui::create_layout(self.screen_area()).0
    }

    /// Calculate number of columns for the gallery based on terminal width
    pub fn calculate_gallery_columns(&self) -> usize {
        GridLayout::new(self.main_area().width).columns
    }

    /// Rows of cards visible at the current terminal height
    pub fn calculate_gallery_visible_rows(&self) -> usize {
        GridLayout::visible_rows(self.main_area().height)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        if self.state.current_view.is_form_view() {
            return self.handle_contact_key(key);
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    self.navigate(view);
                }
            }
            KeyCode::Tab => self.navigate(self.state.current_view.next()),
            KeyCode::Char('t') => {
                self.state.toggle_theme();
                tracing::debug!("Theme switched to {}", self.state.theme.label());
            }
            KeyCode::Esc => {
                self.state.feedback.dismiss_latest();
            }
            _ => match self.state.current_view {
                View::About => self.handle_about_key(key),
                View::Projects => self.handle_projects_key(key),
                View::Contact => {}
            },
        }
        Ok(())
    }

    /// Navigate to a new section
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        if self.state.view_history.len() > MAX_HISTORY {
            self.state.view_history.remove(0);
        }
        self.state.current_view = view;
    }

    /// Go back to previous section
    pub fn go_back(&mut self) {
        self.state.current_view = self.state.view_history.pop().unwrap_or_default();
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        let max_scroll = ui::about_max_scroll(&self.state.profile, self.main_area());
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_about_down(max_scroll),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_about_up(),
            KeyCode::Home | KeyCode::Char('g') => self.state.about_scroll = 0,
            _ => {}
        }
    }

    /// Handle keys in the Projects gallery
    fn handle_projects_key(&mut self, key: KeyEvent) {
        // Calculate grid dimensions for navigation
        let columns = self.calculate_gallery_columns();
        let visible_rows = self.calculate_gallery_visible_rows();
        let total = self.state.gallery.len();
        if self.state.gallery.is_empty() {
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down_grid(columns, total);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up_grid(columns);
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.state.move_selection_left(columns);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.move_selection_right(columns, total);
            }
            KeyCode::Home | KeyCode::Char('g') => self.state.reset_selection(),
            KeyCode::Char('y') => self.copy_link(ActionKind::Live),
            KeyCode::Char('Y') => self.copy_link(ActionKind::Code),
            _ => return,
        }
        self.state.ensure_selection_visible(columns, visible_rows);
    }

    /// Handle keys in the contact form
    fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let command = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SEND_MODIFIER);

        match key.code {
            KeyCode::Char('s') if command => self.submit_contact(),
            KeyCode::Esc => {
                if self.state.feedback.is_empty() {
                    self.go_back();
                } else {
                    self.state.feedback.dismiss_latest();
                }
            }
            KeyCode::Tab => self.state.contact.next_field(),
            KeyCode::BackTab => self.state.contact.prev_field(),
            KeyCode::Down if self.state.contact.focused_field().is_some() => {
                self.state.contact.next_field()
            }
            KeyCode::Up => self.state.contact.prev_field(),
            KeyCode::Enter => {
                if self.state.contact.is_send_button_active() {
                    self.submit_contact();
                } else if self
                    .state
                    .contact
                    .focused_field()
                    .is_some_and(|f| f.is_multiline())
                {
                    self.state.update_contact(ContactForm::push_newline);
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Backspace => self.state.update_contact(ContactForm::pop_char),
            KeyCode::Char(c) if !command => {
                self.state.update_contact(|form| form.push_char(c));
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand it to a background dispatch task
    pub fn submit_contact(&mut self) {
        if self.state.contact.is_submitting() {
            tracing::debug!("Submit ignored, a message is already being sent");
            return;
        }

        let missing = self.state.contact.validate();
        if !missing.is_empty() {
            tracing::debug!("Submit blocked, missing fields: {missing:?}");
            self.state
                .feedback
                .present(&Err(DispatchError::Validation(missing.clone())));
            self.state.update_contact(|form| form.with_missing(missing));
            return;
        }

        let snapshot = self.state.contact.clone();
        self.state.update_contact(ContactForm::begin_submit);

        let dispatcher = self.dispatcher.clone();
        let tx = self.dispatch_tx.clone();
        tokio::spawn(async move {
            let result = dispatcher.submit(&snapshot).await;
            if tx.send(result).is_err() {
                tracing::debug!("Dispatch finished after the app closed");
            }
        });
    }

    /// Apply finished dispatches to the form and show their outcome
    pub fn poll_dispatch(&mut self) {
        while let Ok(result) = self.dispatch_rx.try_recv() {
            self.apply_dispatch_result(result);
        }
    }

    fn apply_dispatch_result(&mut self, result: DispatchResult) {
        self.state.feedback.present(&result);
        match result {
            Ok(()) => self.state.update_contact(ContactForm::complete_success),
            Err(DispatchError::Validation(missing)) => self
                .state
                .update_contact(|form| form.cancel_submit().with_missing(missing)),
            Err(_) => self.state.update_contact(ContactForm::complete_failure),
        }
        tracing::debug!("Contact form status: {}", self.state.contact.status.label());
    }

    /// Per-frame housekeeping: a sent form is cleared one frame after its
    /// `Success` was applied
    pub fn tick(&mut self) {
        if self.state.contact.is_sent() {
            self.state.update_contact(ContactForm::reset);
        }
        self.state.feedback.prune(Instant::now());
    }

    /// Copy the selected card's link of the given kind
    fn copy_link(&mut self, kind: ActionKind) {
        let url = self
            .state
            .gallery
            .get(self.state.selected_index)
            .and_then(|item| item.action(kind))
            .map(|action| action.url.clone());

        let Some(url) = url else {
            self.copy_message = Some(format!("No {} link for this project", kind.label()));
            return;
        };

        match self.copy_to_clipboard(&url) {
            Ok(()) => self.copy_message = Some(format!("Copied {} link", kind.label())),
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                self.copy_message = Some(url);
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        self.copy_message = None;

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(view) = ui::sidebar_view_at(self.sidebar_area(), mouse.column, mouse.row)
            {
                self.navigate(view);
                return Ok(());
            }
        }

        match self.state.current_view {
            View::About => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    let max_scroll = ui::about_max_scroll(&self.state.profile, self.main_area());
                    self.state.scroll_about_down(max_scroll);
                }
                MouseEventKind::ScrollUp => self.state.scroll_about_up(),
                _ => {}
            },
            View::Projects => self.handle_gallery_mouse(mouse),
            View::Contact => {}
        }
        Ok(())
    }

    fn handle_gallery_mouse(&mut self, mouse: MouseEvent) {
        let columns = self.calculate_gallery_columns();
        let visible_rows = self.calculate_gallery_visible_rows();
        let total = self.state.gallery.len();

        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.move_selection_up_grid(columns),
            MouseEventKind::ScrollDown => self.state.move_selection_down_grid(columns, total),
            MouseEventKind::Down(MouseButton::Left) => {
                let grid = GridLayout::new(self.main_area().width);
                if let Some(index) = grid.index_at(
                    self.main_area(),
                    mouse.column,
                    mouse.row,
                    self.state.scroll_offset,
                    total,
                ) {
                    self.state.selected_index = index;
                }
            }
            _ => return,
        }
        self.state.ensure_selection_visible(columns, visible_rows);
    }
}
