//! Studio color extension trait for app-specific colors.
//!
//! Adds `theme.studio()` to Iced's `Theme` for surfaces, borders and text
//! tones that the extended palette does not name.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::StudioColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.studio().surface.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// STUDIO COLOR SET
// =============================================================================

/// Colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct StudioColorSet {
    // === Surfaces ===
    /// Cards and panels
    pub surface: Color,
    /// Raised surfaces (detail panel, zoom dialog)
    pub surface_raised: Color,
    /// Empty keycaps on a board
    pub keycap: Color,
    /// Letter stones on a board
    pub stone: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (kickers, captions)
    pub text_muted: Color,

    // === Borders ===
    /// Default border color
    pub border_default: Color,
    /// Subtle border for inner separators
    pub border_subtle: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Zoom overlay backdrop
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for studio-specific colors.
pub trait StudioColors {
    /// Get the studio color set for this theme.
    fn studio(&self) -> StudioColorSet;
}

impl StudioColors for Theme {
    fn studio(&self) -> StudioColorSet {
        let palette = self.extended_palette();
        let background = palette.background.base.color;
        let text = palette.background.base.text;

        StudioColorSet {
            surface: blend_color(background, Color::WHITE, 0.04),
            surface_raised: blend_color(background, Color::WHITE, 0.08),
            keycap: blend_color(background, Color::WHITE, 0.10),
            stone: Color::from_rgb8(0x0b, 0x0f, 0x0e),
            text_secondary: Color { a: 0.78, ..text },
            text_muted: Color { a: 0.52, ..text },
            border_default: Color { a: 0.14, ..text },
            border_subtle: Color { a: 0.07, ..text },
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.78),
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Linear blend from `base` towards `target` by `amount` (0.0 to 1.0).
pub fn blend_color(base: Color, target: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color {
        r: base.r + (target.r - base.r) * amount,
        g: base.g + (target.g - base.g) * amount,
        b: base.b + (target.b - base.b) * amount,
        a: base.a + (target.a - base.a) * amount,
    }
}

/// The same color with a different alpha.
pub fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let base = Color::from_rgb(0.2, 0.4, 0.6);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(
            blend_color(base, Color::WHITE, 7.0),
            blend_color(base, Color::WHITE, 1.0)
        );
        assert!((blend_color(base, Color::WHITE, 1.0).r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn studio_theme_surfaces_are_lighter_than_background() {
        let theme = crate::theme::studio_theme();
        let background = theme.extended_palette().background.base.color;
        let studio = theme.studio();
        assert!(studio.surface.g > background.g);
        assert!(studio.surface_raised.g > studio.surface.g);
    }
}
