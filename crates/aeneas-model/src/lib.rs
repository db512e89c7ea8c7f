//! Content catalogs for the AENEAS Studio showcase.
//!
//! Everything in this crate is static, read-only data plus the small pure
//! helpers that shape it for display:
//!
//! - [`ids`]: closed identifier sets ([`ModeId`], [`ProjectId`])
//! - [`mode`]: studio mode records ([`ModeConfig`])
//! - [`project`]: case studies, gallery visuals and tile board specs
//! - [`lab`]: Studio Lab entries ([`LabItem`])
//! - [`text`]: emphasised text spans and the [`highlight`] splitter
//! - [`tools`]: tool badge parsing ([`parse_tools`])
//! - [`catalog`]: the [`ContentCatalog`] lookup trait and [`StudioCatalog`]
//!
//! Lookups by typed identifier are total. The only fallible surface is
//! parsing identifiers from text (see [`ModelError`]).

pub mod catalog;
mod content;
pub mod error;
pub mod ids;
pub mod lab;
pub mod mode;
pub mod project;
pub mod text;
pub mod tools;

pub use catalog::{ContentCatalog, StudioCatalog, StudioCopy};
pub use error::{ModelError, Result};
pub use ids::{ModeId, ProjectId};
pub use lab::{LabItem, LabItemKind, PENDING_CASE_STUDY};
pub use mode::{ColorTokens, ConstellationCard, ModeConfig};
pub use project::{
    Accent, BoardVariant, ExternalLink, GRID_COLS, GRID_ROWS, LetterStone, ProcessStep,
    ProjectContext, ProjectDetail, ProjectVisual, TileBoardSpec,
};
pub use text::{TextSpan, highlight};
pub use tools::{ToolInfo, parse_tools};
