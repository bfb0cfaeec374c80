//! Projects gallery grid

use super::components::wrap_text;
use super::theme::Palette;
use crate::app::App;
use crate::content::{ActionKind, GalleryItem};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 9; // 2 (borders) + image + title + 3 description + tags + actions
const CARD_SPACING_H: u16 = 1;
const DESCRIPTION_LINES: usize = 3;

/// Helper for grid layout calculations
pub struct GridLayout {
    pub columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    pub fn new(area_width: u16) -> Self {
        // Account for outer block borders (2 chars total)
        let usable_width = area_width.saturating_sub(2);

        // Each card needs MIN_CARD_WIDTH + spacing (except last card)
        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = (usable_width.saturating_sub(total_spacing)) / columns as u16;

        Self {
            columns,
            card_width: card_width.min(usable_width).max(1),
        }
    }

    /// Rows of cards that fit in the given outer height
    pub fn visible_rows(area_height: u16) -> usize {
        (area_height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        let row = index / self.columns;
        let col = index % self.columns;
        (row, col)
    }

    /// Get card area for a given position within the inner area
    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        let x = inner.x + (col as u16) * (self.card_width + CARD_SPACING_H);
        let y = inner.y + (row as u16) * CARD_HEIGHT;

        Rect {
            x,
            y,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }

    /// Item index under a screen cell, accounting for scroll
    pub fn index_at(
        &self,
        area: Rect,
        column: u16,
        row: u16,
        scroll_rows: usize,
        total: usize,
    ) -> Option<usize> {
        let inner = inner_area(area);
        if column < inner.x || row < inner.y || column >= inner.x + inner.width {
            return None;
        }
        let col = ((column - inner.x) / (self.card_width + CARD_SPACING_H)) as usize;
        let within_card = (column - inner.x) % (self.card_width + CARD_SPACING_H) < self.card_width;
        let grid_row = ((row - inner.y) / CARD_HEIGHT) as usize + scroll_rows;
        let index = grid_row * self.columns + col;
        (col < self.columns && within_card && index < total).then_some(index)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Draw the projects grid
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    draw_gallery(
        frame,
        area,
        app.state.gallery.items(),
        app.state.selected_index,
        app.state.scroll_offset,
        palette,
    );
}

fn draw_gallery(
    frame: &mut Frame,
    area: Rect,
    items: &[GalleryItem],
    selected_index: usize,
    scroll_rows: usize,
    palette: &Palette,
) {
    let title = if items.is_empty() {
        " Projects ".to_string()
    } else {
        format!(" Projects ({}/{}) ", selected_index + 1, items.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg));
    frame.render_widget(block, area);

    let inner = inner_area(area);
    if items.is_empty() {
        let message = Paragraph::new("No projects to show.")
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let grid = GridLayout::new(area.width);
    let first = scroll_rows * grid.columns;

    for (idx, item) in items.iter().enumerate().skip(first) {
        let (row, col) = grid.index_to_pos(idx - first);
        let card_area = grid.card_area(inner, row, col);

        // Stop once cards fall below the visible area
        if card_area.y + card_area.height > inner.y + inner.height {
            break;
        }

        draw_card(frame, card_area, item, idx == selected_index, palette);
    }
}

/// Draw a single gallery card
fn draw_card(frame: &mut Frame, area: Rect, item: &GalleryItem, is_selected: bool, palette: &Palette) {
    let border_style = if is_selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.card_bg).fg(palette.text));

    let width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(card_lines(item, width, is_selected, palette)).block(block);
    frame.render_widget(paragraph, area);
}

/// Truncate to a number of characters, marking the cut with an ellipsis
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 1 {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Card content: image, title with badge, description, then the optional
/// tag and action rows
fn card_lines<'a>(
    item: &'a GalleryItem,
    width: usize,
    is_selected: bool,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let muted = Style::default().fg(palette.muted);
    let mut lines = Vec::with_capacity(7);

    lines.push(Line::from(Span::styled(
        truncate_str(&format!("▣ {}", item.image), width),
        muted,
    )));

    let badge = format!(" [{}]", item.badge);
    let title_width = width.saturating_sub(badge.chars().count());
    let title_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::styled(truncate_str(&item.title, title_width), title_style),
        Span::styled(badge, Style::default().fg(palette.accent)),
    ]));

    let wrapped = wrap_text(&item.description, width);
    let overflow = wrapped.len() > DESCRIPTION_LINES;
    for (i, line) in wrapped.into_iter().take(DESCRIPTION_LINES).enumerate() {
        let line = if overflow && i == DESCRIPTION_LINES - 1 {
            truncate_str(&format!("{line} …"), width)
        } else {
            line
        };
        lines.push(Line::from(Span::styled(line, muted)));
    }

    if let Some(tags) = &item.tags {
        let row = tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate_str(&row, width),
            Style::default().fg(palette.accent),
        )));
    }

    if !item.actions.is_empty() {
        let mut spans = Vec::new();
        for action in &item.actions {
            let key = match action.kind {
                ActionKind::Live => "y",
                ActionKind::Code => "Y",
            };
            spans.push(Span::styled(
                format!("[{}]", action.kind.label()),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {key}  "), muted));
        }
        lines.push(Line::from(spans));
    }

    lines
}
