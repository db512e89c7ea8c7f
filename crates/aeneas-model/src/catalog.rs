//! Read-only lookup over the studio content.
//!
//! [`ContentCatalog`] is the seam between static content and everything that
//! consumes it. The state machine and the presentation layer receive a
//! catalog instead of reaching for globals, which keeps them testable with
//! small fixture catalogs.

use crate::content;
use crate::ids::{ModeId, ProjectId};
use crate::lab::LabItem;
use crate::mode::ModeConfig;
use crate::project::{ExternalLink, ProjectDetail, ProjectVisual, TileBoardSpec};
use crate::text::TextSpan;

/// Page-level copy that does not belong to a mode or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioCopy {
    pub brand_name: &'static str,
    pub brand_tag: &'static str,
    pub hero_headline: &'static str,
    pub hero_body: &'static [TextSpan<'static>],
    pub hero_chips: &'static [&'static str],
    pub constellation_title: &'static str,
    pub constellation_subtitle: &'static str,
    pub constellation_badge: &'static str,
    pub panel_title: &'static str,
    pub work_kicker: &'static str,
    pub work_heading: &'static [TextSpan<'static>],
    pub work_intro: &'static [&'static str],
    pub lab_label: &'static str,
    pub lab_title: &'static [&'static str],
    pub lab_body: &'static str,
    pub lab_keywords: &'static str,
    pub status_label: &'static str,
    pub status_body: &'static [TextSpan<'static>],
    pub contact_links: &'static [ExternalLink],
    pub footer_note: &'static str,
}

/// Total lookup over the closed identifier sets.
///
/// Implementations must return a record for every identifier; there is no
/// "not found" case to handle.
pub trait ContentCatalog {
    /// Display data for a mode.
    fn mode(&self, id: ModeId) -> &ModeConfig;

    /// Narrative record for a project.
    fn project(&self, id: ProjectId) -> &ProjectDetail;

    /// Ordered gallery of a project.
    fn visuals(&self, id: ProjectId) -> &[ProjectVisual];

    /// Tile board of a project.
    fn board(&self, id: ProjectId) -> &TileBoardSpec;

    /// Studio Lab entries, in display order.
    fn lab_items(&self) -> &[LabItem];

    /// Page-level copy.
    fn copy(&self) -> &StudioCopy;
}

/// The process-wide studio content, compiled into the binary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StudioCatalog;

impl ContentCatalog for StudioCatalog {
    fn mode(&self, id: ModeId) -> &ModeConfig {
        match id {
            ModeId::Brand => &content::modes::BRAND,
            ModeId::Web => &content::modes::WEB,
            ModeId::Visual => &content::modes::VISUAL,
        }
    }

    fn project(&self, id: ProjectId) -> &ProjectDetail {
        match id {
            ProjectId::Zigzag => &content::projects::ZIGZAG,
            ProjectId::Gmarket => &content::projects::GMARKET,
            ProjectId::Travel => &content::projects::TRAVEL,
        }
    }

    fn visuals(&self, id: ProjectId) -> &[ProjectVisual] {
        match id {
            ProjectId::Zigzag => content::visuals::ZIGZAG,
            ProjectId::Gmarket => content::visuals::GMARKET,
            ProjectId::Travel => content::visuals::TRAVEL,
        }
    }

    fn board(&self, id: ProjectId) -> &TileBoardSpec {
        match id {
            ProjectId::Zigzag => &content::boards::ZIGZAG,
            ProjectId::Gmarket => &content::boards::GMARKET,
            ProjectId::Travel => &content::boards::TRAVEL,
        }
    }

    fn lab_items(&self) -> &[LabItem] {
        content::lab::LAB_ITEMS
    }

    fn copy(&self) -> &StudioCopy {
        &content::copy::STUDIO
    }
}
