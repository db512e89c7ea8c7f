//! Catalog color tokens.
//!
//! Mode colors are stored in the catalog as CSS-like strings. This module
//! turns them into [`Color`]s and maps board accents onto concrete colors.

use aeneas_model::{Accent, ColorTokens};
use iced::Color;
use iced::color;

/// Parse `#RRGGBB`, `#RGB`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
///
/// Channels are 0-255 and alpha is 0.0-1.0. Anything else is `None`.
pub fn parse_color(token: &str) -> Option<Color> {
    let token = token.trim();

    if token.starts_with('#') {
        return parse_hex(token);
    }

    let (args, has_alpha) = if let Some(rest) = token.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = token.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match (parts.as_slice(), has_alpha) {
        ([r, g, b], false) => Some(Color::from_rgb8(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?)),
        ([r, g, b, a], true) => {
            let alpha: f32 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color::from_rgba8(
                r.parse().ok()?,
                g.parse().ok()?,
                b.parse().ok()?,
                alpha,
            ))
        }
        _ => None,
    }
}

fn parse_hex(token: &str) -> Option<Color> {
    let digits = &token[1..];
    // Color::parse slices by byte and also takes #RGBA / #RRGGBBAA
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 | 6 => token.parse::<Color>().ok(),
        _ => None,
    }
}

/// Resolved colors of one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeColors {
    /// Glow behind the constellation card
    pub core: Color,
    /// Tab rail background while the mode is active
    pub tab_background: Color,
    /// Headings and bullets inside the mode panel
    pub accent: Color,
}

impl ModeColors {
    /// Resolve catalog tokens, falling back to `fallback` for any token that
    /// does not parse.
    pub fn resolve(tokens: &ColorTokens, fallback: Color) -> Self {
        let pick = |token: &str| parse_color(token).unwrap_or(fallback);
        Self {
            core: pick(tokens.core),
            tab_background: pick(tokens.tab_background),
            accent: pick(tokens.accent),
        }
    }
}

/// The color of a board accent family.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Emerald => color!(0x34d399),
        Accent::Sky => color!(0x38bdf8),
        Accent::Amber => color!(0xf5b84a),
    }
}

#[cfg(test)]
mod tests {
    use aeneas_model::{ContentCatalog, ModeId, StudioCatalog};

    use super::*;

    fn assert_close(actual: Option<Color>, expected: Color) {
        let actual = actual.unwrap();
        for (a, e) in actual.into_rgba8().iter().zip(expected.into_rgba8()) {
            assert_eq!(*a, e, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn parses_hex() {
        assert_close(parse_color("#4C9990"), Color::from_rgb8(0x4c, 0x99, 0x90));
        assert_close(parse_color("#fff"), Color::WHITE);
        assert_close(parse_color("#0a0"), Color::from_rgb8(0, 0xaa, 0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("#+ff"), None);
        assert_eq!(parse_color("#é12"), None);
        // Alpha forms are not catalog tokens
        assert_eq!(parse_color("#ffff"), None);
        assert_eq!(parse_color("#11223344"), None);
    }

    #[test]
    fn parses_rgba() {
        assert_eq!(
            parse_color("rgba(22,140,126,0.9)"),
            Some(Color::from_rgba8(22, 140, 126, 0.9))
        );
        assert_eq!(
            parse_color("rgb( 1, 2, 3 )"),
            Some(Color::from_rgb8(1, 2, 3))
        );
        assert_eq!(parse_color("rgba(1,2,3)"), None);
        assert_eq!(parse_color("rgba(1,2,3,4)"), None);
        assert_eq!(parse_color("rgb(300,0,0)"), None);
        assert_eq!(parse_color("teal"), None);
    }

    #[test]
    fn every_catalog_token_parses() {
        let catalog = StudioCatalog;
        for id in ModeId::ALL {
            let tokens = &catalog.mode(id).colors;
            for token in [tokens.core, tokens.tab_background, tokens.accent] {
                assert!(parse_color(token).is_some(), "{id}: {token}");
            }
        }
    }

    #[test]
    fn unparsable_tokens_use_fallback() {
        let tokens = ColorTokens {
            core: "nope",
            tab_background: "#000000",
            accent: "",
        };
        let colors = ModeColors::resolve(&tokens, Color::WHITE);
        assert_eq!(colors.core, Color::WHITE);
        assert_eq!(colors.tab_background, Color::BLACK);
        assert_eq!(colors.accent, Color::WHITE);
    }
}
