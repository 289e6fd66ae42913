//! Colour themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent colour family used by the backgrounds and the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Emerald,
    Cyan,
    Amber,
    Violet,
    Crimson,
}

impl ColorTheme {
    /// Primary accent as an RGB triple.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Emerald => (52, 211, 153),
            ColorTheme::Cyan => (34, 211, 238),
            ColorTheme::Amber => (251, 191, 36),
            ColorTheme::Violet => (167, 139, 250),
            ColorTheme::Crimson => (248, 113, 113),
        }
    }

    /// Darker companion accent, used at the head of circuit lines.
    pub fn deep_rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Emerald => (5, 150, 105),
            ColorTheme::Cyan => (8, 145, 178),
            ColorTheme::Amber => (217, 119, 6),
            ColorTheme::Violet => (124, 58, 237),
            ColorTheme::Crimson => (220, 38, 38),
        }
    }

    /// Primary accent colour.
    pub fn color(&self) -> Color {
        let (r, g, b) = self.accent_rgb();
        Color::Rgb(r, g, b)
    }

    /// Secondary accent colour.
    pub fn deep_color(&self) -> Color {
        let (r, g, b) = self.deep_rgb();
        Color::Rgb(r, g, b)
    }

    /// Cycle to the next theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Emerald => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Violet,
            ColorTheme::Violet => ColorTheme::Crimson,
            ColorTheme::Crimson => ColorTheme::Emerald,
        }
    }
}
