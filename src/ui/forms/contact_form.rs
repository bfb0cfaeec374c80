//! Contact form view

use super::field_renderer::{draw_field, FieldState};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::{ContactField, ContactForm, SubmissionStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.contact;

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Phone
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send button
            Constraint::Length(1),             // Status / help
        ])
        .split(inner);

    let intro = vec![
        Line::from(Span::styled(
            "Get in touch",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Have a project in mind or just want to say hi? Send a message.",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    for (idx, field) in ContactField::ALL.iter().enumerate() {
        let state = FieldState {
            is_active: form.active_field_index == idx,
            is_missing: form.is_missing(*field),
            is_locked: form.is_submitting(),
        };
        draw_field(
            frame,
            chunks[idx + 1],
            *field,
            form.value(*field),
            state,
            palette,
        );
    }

    let button_area = Rect {
        width: chunks[5].width.min(24),
        ..chunks[5]
    };
    render_button(
        frame,
        button_area,
        send_button_label(form),
        form.is_send_button_active(),
        !form.is_submitting(),
        palette,
    );

    frame.render_widget(Paragraph::new(status_line(form, palette)), chunks[6]);
}

fn send_button_label(form: &ContactForm) -> &'static str {
    if form.is_submitting() {
        form.status.label()
    } else {
        "Send Message"
    }
}

fn status_line<'a>(form: &ContactForm, palette: &Palette) -> Line<'a> {
    match form.status {
        SubmissionStatus::Idle if !form.missing.is_empty() => Line::from(Span::styled(
            "Fill in the highlighted fields",
            Style::default().fg(palette.warning),
        )),
        SubmissionStatus::Idle => Line::from(Span::styled(
            format!("Tab/Shift+Tab: move  Enter on Send or {SEND_SHORTCUT}: send"),
            Style::default().fg(palette.muted),
        )),
        SubmissionStatus::Submitting => Line::from(Span::styled(
            "Sending your message...",
            Style::default().fg(palette.accent),
        )),
        SubmissionStatus::Success => Line::from(Span::styled(
            "Message sent",
            Style::default().fg(palette.success),
        )),
        SubmissionStatus::Error => Line::from(Span::styled(
            "Sending failed, your message is still here",
            Style::default().fg(palette.error),
        )),
    }
}
