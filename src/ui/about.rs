//! About section: hero, bio, quick facts, skills and footer

use super::theme::Palette;
use crate::app::App;
use crate::content::Profile;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the About section
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let year = chrono::Local::now().year();
    let lines = about_lines(&app.state.profile, palette, year);

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg).fg(palette.text));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.about_scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Furthest the About panel can scroll inside `area`, measured on the
/// wrapped text so long lines on narrow terminals stay reachable
pub fn max_scroll(profile: &Profile, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    if inner_width == 0 {
        return 0;
    }

    let lines = about_lines(profile, &Palette::for_theme(Default::default()), 0);
    let wrapped = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .line_count(inner_width);
    u16::try_from(wrapped)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height)
}

fn heading<'a>(title: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn about_lines<'a>(profile: &'a Profile, palette: &Palette, year: i32) -> Vec<Line<'a>> {
    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(profile.greeting.as_str(), Style::default().fg(palette.text)),
            Span::raw(" "),
            Span::styled(
                format!("I'm {}", profile.name),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(profile.tagline.as_str(), muted)),
    ];

    if !profile.badges.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for badge in &profile.badges {
            spans.push(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(palette.accent),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !profile.about.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("About Me", palette));
        for paragraph in &profile.about {
            lines.push(Line::from(paragraph.as_str()));
        }
    }

    if !profile.facts.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Quick Facts", palette));
        for fact in &profile.facts {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", fact.label), muted),
                Span::raw(fact.value.as_str()),
            ]));
        }
    }

    if !profile.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Skills", palette));
        for skill in &profile.skills {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("• {:<12}", skill.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(skill.note.as_str(), muted),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Contact", palette));
    if let Some(email) = &profile.email {
        lines.push(Line::from(vec![
            Span::styled("Email       ", muted),
            Span::raw(email.as_str()),
        ]));
    }
    for link in &profile.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", link.label), muted),
            Span::raw(link.url.as_str()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("© {year} {}. {}", profile.name, profile.footer),
        muted,
    )));

    lines
}
