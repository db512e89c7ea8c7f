//! Showcase messages.
//!
//! One variant per state machine operation.

use aeneas_core::VisualRef;
use aeneas_model::{ModeId, ProjectId};

/// Messages for the showcase page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseMessage {
    // =========================================================================
    // Modes
    // =========================================================================
    /// User picked a mode from the constellation or the tab rail
    SelectMode(ModeId),

    // =========================================================================
    // Projects
    // =========================================================================
    /// User clicked a project board
    SelectProject(ProjectId),

    /// User closed the detail panel
    CloseProject,

    /// User flipped between case and visual sub-views
    ToggleDetailView,

    // =========================================================================
    // Zoom
    // =========================================================================
    /// User clicked a gallery thumbnail
    OpenVisual(VisualRef),

    /// User dismissed the zoom overlay
    CloseVisual,
}
