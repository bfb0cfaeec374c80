//! UI module for rendering the TUI

mod about;
mod components;
mod forms;
mod layout;
mod projects;
mod theme;

pub use about::max_scroll as about_max_scroll;
pub use layout::{create_layout, sidebar_view_at};
pub use projects::GridLayout;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(app.state.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    // Draw main content based on current view
    match app.state.current_view {
        View::About => about::draw(frame, main_area, app, &palette),
        View::Projects => projects::draw(frame, main_area, app, &palette),
        View::Contact => forms::draw_contact(frame, main_area, app, &palette),
    }

    // Notifications float above every section
    components::render_toasts(frame, main_area, app.state.feedback.toasts(), &palette);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
