//! Tile colours for the light and dark themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Text on light tiles below 8.
pub const DARK_TEXT: Color = Color::Rgb(0x77, 0x6e, 0x65);

/// Text on tiles of 8 and above, and on every dark-theme tile.
pub const LIGHT_TEXT: Color = Color::Rgb(0xf9, 0xf6, 0xf2);

/// Colour scheme for the board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Classic beige board.
    #[default]
    Light,
    /// Charcoal board with muted small tiles.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Background behind the grid.
    pub fn board_background(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(0xbb, 0xad, 0xa0),
            Theme::Dark => Color::Rgb(0x2e, 0x2a, 0x26),
        }
    }

    /// Background colour of a tile. Tiles past 2048 share its colour.
    pub fn tile_background(self, value: u32) -> Color {
        match (self, value) {
            (Theme::Dark, 0) => Color::Rgb(0x45, 0x3f, 0x39),
            (Theme::Dark, 2) => Color::Rgb(0x5c, 0x54, 0x4b),
            (Theme::Dark, 4) => Color::Rgb(0x6e, 0x62, 0x52),
            (_, 0) => Color::Rgb(0xcc, 0xc0, 0xb3),
            (_, 2) => Color::Rgb(0xee, 0xe4, 0xda),
            (_, 4) => Color::Rgb(0xec, 0xe0, 0xc8),
            (_, 8) => Color::Rgb(0xf2, 0xb1, 0x79),
            (_, 16) => Color::Rgb(0xf5, 0x95, 0x63),
            (_, 32) => Color::Rgb(0xf6, 0x7c, 0x5f),
            (_, 64) => Color::Rgb(0xf6, 0x5e, 0x3b),
            (_, 128) => Color::Rgb(0xed, 0xcf, 0x72),
            (_, 256) => Color::Rgb(0xed, 0xcc, 0x61),
            (_, 512) => Color::Rgb(0xed, 0xc8, 0x50),
            (_, 1024) => Color::Rgb(0xed, 0xc5, 0x3f),
            _ => Color::Rgb(0xed, 0xc2, 0x2e),
        }
    }

    /// Text colour of a tile.
    pub fn tile_foreground(self, value: u32) -> Color {
        match self {
            Theme::Light if value < 8 => DARK_TEXT,
            _ => LIGHT_TEXT,
        }
    }
}
