//! Studio palette.
//!
//! A single dark palette: near-black green background, sand text and an
//! emerald primary. Mode and board accents come from the catalog tokens
//! instead (see [`super::tokens`]).

use iced::Theme;
use iced::color;
use iced::theme::Palette;

/// Name the theme is registered under.
pub const THEME_NAME: &str = "AENEAS Night";

/// The base palette fed to [`Theme::custom`].
pub fn studio_palette() -> Palette {
    Palette {
        background: color!(0x050b0a),
        text: color!(0xf3ece0),
        primary: color!(0x34d399),
        success: color!(0x22c55e),
        warning: color!(0xf5b84a),
        danger: color!(0xf87171),
    }
}

/// Creates the studio theme.
pub fn studio_theme() -> Theme {
    Theme::custom(THEME_NAME.to_string(), studio_palette())
}
