//! Field rendering utilities for forms

use crate::state::ContactField;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Visual state of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub is_active: bool,
    pub is_missing: bool,
    pub is_locked: bool,
}

/// Draw a contact field with its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: ContactField,
    value: &str,
    state: FieldState,
    palette: &Palette,
) {
    let border_style = if state.is_missing {
        Style::default().fg(palette.error)
    } else if state.is_active && !state.is_locked {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let value_style = if state.is_locked {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.text)
    };

    let show_placeholder = value.is_empty() && !state.is_active;
    let display_value = if show_placeholder {
        field.placeholder()
    } else {
        value
    };
    let display_style = if show_placeholder {
        Style::default().fg(palette.border)
    } else {
        value_style
    };

    let cursor = if state.is_active && !state.is_locked {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(palette.accent));

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), display_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, display_style),
            cursor_span,
        ]))
    };

    let title = field_title(field, state.is_missing);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.card_bg));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn field_title(field: ContactField, is_missing: bool) -> String {
    let marker = if field.is_required() { " *" } else { "" };
    if is_missing {
        format!(" {}{} (required) ", field.label(), marker)
    } else {
        format!(" {}{} ", field.label(), marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_fields_carry_marker() {
        assert_eq!(field_title(ContactField::Name, false), " Name * ");
        assert_eq!(field_title(ContactField::Phone, false), " Phone ");
    }

    #[test]
    fn test_missing_fields_are_labelled() {
        assert_eq!(
            field_title(ContactField::Message, true),
            " Message * (required) "
        );
    }
}
