//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Button areas for each section, vertically centered in the sidebar
fn sidebar_chunks(area: Rect) -> Vec<Rect> {
    let count = View::ALL.len() as u16;
    let top = area.y + area.height.saturating_sub(count * BUTTON_HEIGHT) / 2;

    (0..count)
        .map(|idx| Rect {
            x: area.x,
            y: top + idx * BUTTON_HEIGHT,
            width: area.width,
            height: BUTTON_HEIGHT,
        })
        .filter(|rect| rect.y + rect.height <= area.y + area.height)
        .collect()
}

/// Section whose sidebar button covers the given cell
pub fn sidebar_view_at(area: Rect, column: u16, row: u16) -> Option<View> {
    if column < area.x || column >= area.x + area.width {
        return None;
    }
    sidebar_chunks(area)
        .iter()
        .position(|chunk| row >= chunk.y && row < chunk.y + chunk.height)
        .and_then(View::from_index)
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    for (view, chunk) in View::ALL.iter().zip(sidebar_chunks(area)) {
        render_sidebar_button(
            frame,
            chunk,
            &(view.index() + 1).to_string(),
            view.label(),
            *view == app.state.current_view,
            palette,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Dispatch readiness
    let dispatch_status = if app.state.dispatch_ready {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(dispatch_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let right_hint = format!(" {} · ^C:quit ", app.state.theme.label());
    let hint_width = right_hint.chars().count() as u16;
    let right_area = Rect {
        x: area.width.saturating_sub(hint_width),
        y: area.height.saturating_sub(1),
        width: hint_width.min(area.width),
        height: 1,
    };
    let right_widget =
        Paragraph::new(right_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(right_widget, right_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::About => "1-3:section  Tab:next  j/k:scroll  t:theme  q:quit".to_string(),
        View::Projects => {
            "h/j/k/l:nav  y:copy live  Y:copy code  Tab:next  t:theme  q:quit".to_string()
        }
        View::Contact => format!("Tab:next field  {SEND_SHORTCUT}:send  Esc:back"),
    }
}
