//! Behaviour behind the AENEAS Studio showcase.
//!
//! This crate has no GUI dependency. It provides:
//!
//! - [`board`]: renders sparse letter placements into a dense, row-major grid
//! - [`showcase`]: the [`Showcase`] state machine (mode, open project,
//!   detail sub-view, zoomed visual)
//! - [`view_model`]: [`ShowcaseView`], a read-only snapshot derived from the
//!   state machine and its catalog for the presentation layer
//!
//! All mutation goes through the six [`Showcase`] operations; the presentation
//! layer only ever reads.

pub mod board;
pub mod showcase;
pub mod view_model;

pub use board::{Board, Cell, GridSize, Placement, render_board, render_tile_board};
pub use showcase::{DetailView, Rejection, Showcase, ShowcaseState, Transition, VisualRef};
pub use view_model::{
    DetailPanel, GalleryItem, LabCard, ModeTab, ProjectTile, ShowcaseView, ToggleLabel,
    ZoomOverlay,
};
