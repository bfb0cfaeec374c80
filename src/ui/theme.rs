//! Color palettes for the light and dark themes

use crate::state::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub card_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(20, 20, 20),
                card_bg: Color::Rgb(30, 30, 30),
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Rgb(236, 201, 75),
                border: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            Theme::Light => Self {
                bg: Color::Rgb(245, 245, 246),
                card_bg: Color::White,
                text: Color::Rgb(26, 32, 44),
                muted: Color::Rgb(113, 128, 150),
                accent: Color::Rgb(214, 158, 46),
                border: Color::Rgb(203, 213, 224),
                success: Color::Rgb(56, 161, 105),
                warning: Color::Rgb(221, 107, 32),
                error: Color::Rgb(229, 62, 62),
            },
        }
    }
}
