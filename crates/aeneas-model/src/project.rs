//! Case studies, gallery visuals and tile board specs.

use crate::ids::ProjectId;
use crate::text::{TextSpan, highlight};

/// Rows on every project tile board.
pub const GRID_ROWS: usize = 5;

/// Columns on every project tile board.
pub const GRID_COLS: usize = 10;

// =============================================================================
// PROJECT DETAIL
// =============================================================================

/// One numbered step of a case study's process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub label: &'static str,
    pub body: &'static str,
}

/// A link passed through to the host unchanged (URL, `mailto:`, PDF path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The "Context & Problem" copy of a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectContext {
    /// Plain text in which every occurrence of each key is emphasised.
    Highlighted {
        text: &'static str,
        keys: &'static [&'static str],
    },
    /// Copy that is already split into spans.
    Segments(&'static [TextSpan<'static>]),
}

impl ProjectContext {
    /// Resolve the context into display spans.
    pub fn spans(&self) -> Vec<TextSpan<'static>> {
        match self {
            Self::Highlighted { text, keys } => highlight(*text, *keys),
            Self::Segments(spans) => spans.to_vec(),
        }
    }
}

/// Narrative record for one case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub kicker: &'static str,
    pub title: &'static str,
    pub period: Option<&'static str>,
    pub client_type: Option<&'static str>,
    /// Comma separated tool names; see [`crate::parse_tools`].
    pub tools: Option<&'static str>,
    pub role: &'static str,
    pub context: ProjectContext,
    pub goals: &'static [&'static str],
    pub process: &'static [ProcessStep],
    pub outcome: &'static str,
    pub links: &'static [ExternalLink],
}

// =============================================================================
// VISUALS
// =============================================================================

/// One image in a project's gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectVisual {
    /// Source identifier, relative to the host's asset root.
    pub src: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

// =============================================================================
// TILE BOARD
// =============================================================================

/// A glyph placed on a tile board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStone {
    pub row: usize,
    pub col: usize,
    pub glyph: char,
}

impl LetterStone {
    pub const fn new(row: usize, col: usize, glyph: char) -> Self {
        Self { row, col, glyph }
    }
}

/// Width class of the caption card laid over a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardVariant {
    Wide,
    Narrow,
}

impl BoardVariant {
    /// Caption card width as a percentage of the board width.
    pub fn card_width_percent(&self) -> u16 {
        match self {
            Self::Wide => 72,
            Self::Narrow => 64,
        }
    }
}

/// Accent family of a project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Emerald,
    Sky,
    Amber,
}

/// Everything needed to draw one project's tile board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBoardSpec {
    /// Letters spelling the project name, on a [`GRID_ROWS`] × [`GRID_COLS`] grid.
    pub letters: &'static [LetterStone],
    pub variant: BoardVariant,
    pub accent: Accent,
    /// Category line and discipline line of the caption card.
    pub caption: [&'static str; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_width_follows_variant() {
        assert_eq!(BoardVariant::Wide.card_width_percent(), 72);
        assert_eq!(BoardVariant::Narrow.card_width_percent(), 64);
    }

    #[test]
    fn segments_context_is_returned_verbatim() {
        const SPANS: &[TextSpan<'static>] =
            &[TextSpan::plain("before "), TextSpan::emphasised("key")];
        let context = ProjectContext::Segments(SPANS);
        assert_eq!(context.spans(), SPANS.to_vec());
    }

    #[test]
    fn highlighted_context_is_split() {
        let context = ProjectContext::Highlighted {
            text: "alpha beta",
            keys: &["beta"],
        };
        assert_eq!(
            context.spans(),
            vec![TextSpan::plain("alpha "), TextSpan::emphasised("beta")]
        );
    }
}
