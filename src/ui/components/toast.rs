//! Toast notifications stacked in the top-right corner

use crate::state::{Toast, ToastKind};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 44;
const MARGIN: u16 = 1;

/// Render every visible toast, newest on top
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast], palette: &Palette) {
    let now = Instant::now();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
    if width < 10 {
        return;
    }

    let mut y = area.y + MARGIN;
    for toast in toasts.iter().rev() {
        let lines = toast_lines(toast, width.saturating_sub(4) as usize, palette, now);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        // Slide in from the right edge
        let offset = ((1.0 - toast.slide_progress(now)) * width as f32) as u16;
        let x = area.x + area.width.saturating_sub(width + MARGIN) + offset;
        let visible_width = width.min((area.x + area.width).saturating_sub(x));
        if visible_width == 0 {
            y += height;
            continue;
        }

        let toast_area = Rect {
            x,
            y,
            width: visible_width,
            height,
        };
        frame.render_widget(Clear, toast_area);

        let color = kind_color(toast.kind, palette);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(palette.card_bg));
        let widget = Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(palette.card_bg));
        frame.render_widget(widget, toast_area);

        y += height;
    }
}

fn kind_color(kind: ToastKind, palette: &Palette) -> ratatui::style::Color {
    match kind {
        ToastKind::Success => palette.success,
        ToastKind::Warning => palette.warning,
        ToastKind::Error => palette.error,
    }
}

fn kind_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Warning => "!",
        ToastKind::Error => "✗",
    }
}

fn toast_lines<'a>(
    toast: &'a Toast,
    max_width: usize,
    palette: &Palette,
    now: Instant,
) -> Vec<Line<'a>> {
    let color = kind_color(toast.kind, palette);
    let mut title = vec![
        Span::styled(
            format!("{} ", kind_icon(toast.kind)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            toast.title.as_str(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if toast.closable {
        let secs = toast.remaining(now).as_secs() + 1;
        title.push(Span::styled(
            format!("  {secs}s · Esc"),
            Style::default().fg(palette.muted),
        ));
    }

    let mut lines = vec![Line::from(title)];
    for line in wrap_text(&toast.description, max_width) {
        lines.push(Line::from(Span::styled(
            line,
            Style::default().fg(palette.muted),
        )));
    }
    lines
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let max_width = max_width.max(1);

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Could not send message. Please retry", 16),
            vec!["Could not send", "message. Please", "retry"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_long_word_on_own_line() {
        assert_eq!(wrap_text("hi supercalifragilistic", 5), vec!["hi", "supercalifragilistic"]);
    }
}
