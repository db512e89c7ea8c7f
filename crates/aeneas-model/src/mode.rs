//! Studio mode records.

use crate::ids::ModeId;

/// Color tokens attached to a mode.
///
/// Tokens are opaque strings (`"#RRGGBB"` or `"rgba(r,g,b,a)"`). The model
/// never interprets them; the presentation layer turns them into colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Radial glow at the center of the radar panel.
    pub core: &'static str,
    /// Background of the active tab chip.
    pub tab_background: &'static str,
    /// Accent used for dots, borders and the constellation star.
    pub accent: &'static str,
}

/// Summary card shown in the constellation map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstellationCard {
    /// Numbered kicker, e.g. `01 · BRAND CORE`.
    pub kicker: &'static str,
    /// Short title.
    pub title: &'static str,
    /// One-line tagline.
    pub tagline: &'static str,
}

/// Display data for one studio mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub id: ModeId,
    pub tab_label: &'static str,
    pub chip_label: &'static str,
    pub section_label: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    /// Bullet list rendered under the body, in order.
    pub bullets: &'static [&'static str],
    pub focus: &'static str,
    pub status_label: &'static str,
    pub route_label: &'static str,
    /// Label drawn inside the radar target.
    pub title_in_target: &'static str,
    pub card: ConstellationCard,
    pub colors: ColorTokens,
}
