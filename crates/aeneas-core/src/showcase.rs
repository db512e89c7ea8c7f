//! Showcase state machine.
//!
//! [`Showcase`] owns the page state: the active mode, the open project, the
//! project's detail sub-view and the zoomed gallery image. The fields are
//! private; the six operations below are the only way to change them, which
//! keeps these rules intact:
//!
//! - a zoomed visual always belongs to the open project;
//! - opening another project or closing the current one resets the sub-view
//!   to [`DetailView::Case`] and clears the zoom in the same step;
//! - a mode is always selected.
//!
//! Operations never fail. Calls that make no sense in the current state are
//! ignored and reported as [`Transition::Rejected`] so the caller can log them.

use aeneas_model::{ContentCatalog, ModeId, ProjectId, ProjectVisual, StudioCatalog};
use thiserror::Error;

// =============================================================================
// STATE
// =============================================================================

/// Which half of the detail panel is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailView {
    /// Context, goals, process and outcome.
    #[default]
    Case,
    /// Gallery of project visuals.
    Visual,
}

impl DetailView {
    /// The other sub-view.
    pub fn toggled(self) -> Self {
        match self {
            Self::Case => Self::Visual,
            Self::Visual => Self::Case,
        }
    }
}

/// Reference to one gallery image: its project and position in that
/// project's visual list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualRef {
    pub project: ProjectId,
    pub index: usize,
}

impl VisualRef {
    pub const fn new(project: ProjectId, index: usize) -> Self {
        Self { project, index }
    }
}

/// Read-only snapshot of the showcase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseState {
    pub active_mode: ModeId,
    pub active_project: Option<ProjectId>,
    pub detail_view: DetailView,
    pub zoomed_visual: Option<VisualRef>,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Outcome of a showcase operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The operation was valid but the state already matched.
    Unchanged,
    /// The operation was ignored.
    Rejected(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The operation needs an open project.
    #[error("no project is open")]
    NoActiveProject,

    /// The visual is not part of the open project's gallery.
    #[error("visual {index} of {project} is not in the open project's gallery")]
    ForeignVisual {
        /// Project named by the rejected reference.
        project: ProjectId,
        /// Index named by the rejected reference.
        index: usize,
    },
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// The showcase state machine over a content catalog.
#[derive(Debug, Clone)]
pub struct Showcase<C = StudioCatalog> {
    catalog: C,
    state: ShowcaseState,
}

impl Default for Showcase<StudioCatalog> {
    fn default() -> Self {
        Self::new(StudioCatalog)
    }
}

impl<C: ContentCatalog> Showcase<C> {
    /// Start in the default mode with nothing open.
    pub fn new(catalog: C) -> Self {
        Self::with_initial_mode(catalog, ModeId::default())
    }

    /// Start in `mode` with nothing open.
    pub fn with_initial_mode(catalog: C, mode: ModeId) -> Self {
        Self {
            catalog,
            state: ShowcaseState {
                active_mode: mode,
                ..ShowcaseState::default()
            },
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Copy of the current state.
    pub fn state(&self) -> ShowcaseState {
        self.state
    }

    pub fn active_mode(&self) -> ModeId {
        self.state.active_mode
    }

    pub fn active_project(&self) -> Option<ProjectId> {
        self.state.active_project
    }

    pub fn detail_view(&self) -> DetailView {
        self.state.detail_view
    }

    pub fn zoomed_visual(&self) -> Option<VisualRef> {
        self.state.zoomed_visual
    }

    /// Catalog record of the zoomed visual.
    pub fn zoomed(&self) -> Option<&ProjectVisual> {
        let visual = self.state.zoomed_visual?;
        self.catalog.visuals(visual.project).get(visual.index)
    }

    // ===== Operations =====

    /// Switch mode. Project, sub-view and zoom are left alone.
    pub fn select_mode(&mut self, mode: ModeId) -> Transition {
        let next = ShowcaseState {
            active_mode: mode,
            ..self.state
        };
        self.commit("select_mode", next)
    }

    /// Open a project. Opening a different project resets the sub-view and
    /// zoom; re-selecting the open project keeps them.
    pub fn select_project(&mut self, project: ProjectId) -> Transition {
        if self.state.active_project == Some(project) {
            return Transition::Unchanged;
        }
        let next = ShowcaseState {
            active_project: Some(project),
            detail_view: DetailView::Case,
            zoomed_visual: None,
            ..self.state
        };
        self.commit("select_project", next)
    }

    /// Close the open project, resetting sub-view and zoom.
    pub fn close_project(&mut self) -> Transition {
        let next = ShowcaseState {
            active_project: None,
            detail_view: DetailView::Case,
            zoomed_visual: None,
            ..self.state
        };
        self.commit("close_project", next)
    }

    /// Flip between case and visual sub-views.
    pub fn toggle_detail_view(&mut self) -> Transition {
        if self.state.active_project.is_none() {
            return Self::reject("toggle_detail_view", Rejection::NoActiveProject);
        }
        let next = ShowcaseState {
            detail_view: self.state.detail_view.toggled(),
            ..self.state
        };
        self.commit("toggle_detail_view", next)
    }

    /// Zoom into a visual of the open project.
    pub fn open_visual(&mut self, visual: VisualRef) -> Transition {
        let Some(active) = self.state.active_project else {
            return Self::reject("open_visual", Rejection::NoActiveProject);
        };
        let in_gallery = visual.project == active
            && visual.index < self.catalog.visuals(active).len();
        if !in_gallery {
            return Self::reject(
                "open_visual",
                Rejection::ForeignVisual {
                    project: visual.project,
                    index: visual.index,
                },
            );
        }
        let next = ShowcaseState {
            zoomed_visual: Some(visual),
            ..self.state
        };
        self.commit("open_visual", next)
    }

    /// Dismiss the zoomed visual.
    pub fn close_visual(&mut self) -> Transition {
        let next = ShowcaseState {
            zoomed_visual: None,
            ..self.state
        };
        self.commit("close_visual", next)
    }

    fn commit(&mut self, operation: &'static str, next: ShowcaseState) -> Transition {
        if next == self.state {
            return Transition::Unchanged;
        }
        self.state = next;
        tracing::debug!(
            operation,
            mode = %next.active_mode,
            project = ?next.active_project,
            view = ?next.detail_view,
            zoom = ?next.zoomed_visual,
            "Showcase transition applied"
        );
        Transition::Applied
    }

    fn reject(operation: &'static str, rejection: Rejection) -> Transition {
        tracing::warn!(operation, %rejection, "Showcase operation ignored");
        Transition::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_brand_with_nothing_open() {
        let showcase = Showcase::default();
        assert_eq!(showcase.state(), ShowcaseState::default());
        assert_eq!(showcase.active_mode(), ModeId::Brand);
    }

    #[test]
    fn initial_mode_is_configurable() {
        let showcase = Showcase::with_initial_mode(StudioCatalog, ModeId::Visual);
        assert_eq!(showcase.active_mode(), ModeId::Visual);
        assert_eq!(showcase.active_project(), None);
    }

    #[test]
    fn toggle_without_project_is_rejected() {
        let mut showcase = Showcase::default();
        assert_eq!(
            showcase.toggle_detail_view(),
            Transition::Rejected(Rejection::NoActiveProject)
        );
        assert_eq!(showcase.detail_view(), DetailView::Case);
    }

    #[test]
    fn open_visual_without_project_is_rejected() {
        let mut showcase = Showcase::default();
        let result = showcase.open_visual(VisualRef::new(ProjectId::Zigzag, 0));
        assert_eq!(result, Transition::Rejected(Rejection::NoActiveProject));
        assert_eq!(showcase.zoomed_visual(), None);
    }

    #[test]
    fn foreign_visual_is_rejected() {
        let mut showcase = Showcase::default();
        showcase.select_project(ProjectId::Gmarket);
        let result = showcase.open_visual(VisualRef::new(ProjectId::Zigzag, 0));
        assert!(matches!(
            result,
            Transition::Rejected(Rejection::ForeignVisual { .. })
        ));
        assert_eq!(showcase.zoomed_visual(), None);
    }

    #[test]
    fn out_of_range_visual_is_rejected() {
        let mut showcase = Showcase::default();
        showcase.select_project(ProjectId::Gmarket);
        let result = showcase.open_visual(VisualRef::new(ProjectId::Gmarket, 3));
        assert_eq!(
            result,
            Transition::Rejected(Rejection::ForeignVisual {
                project: ProjectId::Gmarket,
                index: 3,
            })
        );
    }

    #[test]
    fn reselecting_open_project_keeps_sub_view_and_zoom() {
        let mut showcase = Showcase::default();
        showcase.select_project(ProjectId::Travel);
        showcase.toggle_detail_view();
        showcase.open_visual(VisualRef::new(ProjectId::Travel, 1));
        let before = showcase.state();

        assert_eq!(showcase.select_project(ProjectId::Travel), Transition::Unchanged);
        assert_eq!(showcase.state(), before);
    }

    #[test]
    fn zoomed_resolves_through_catalog() {
        let mut showcase = Showcase::default();
        showcase.select_project(ProjectId::Zigzag);
        showcase.open_visual(VisualRef::new(ProjectId::Zigzag, 1));
        let zoomed = showcase.zoomed().map(|visual| visual.src);
        assert_eq!(zoomed, Some("/work/zigzag/02-overview-kv.jpg"));
    }

    #[test]
    fn closing_twice_is_unchanged() {
        let mut showcase = Showcase::default();
        showcase.select_project(ProjectId::Zigzag);
        assert!(showcase.close_project().is_applied());
        assert_eq!(showcase.close_project(), Transition::Unchanged);
        assert_eq!(showcase.close_visual(), Transition::Unchanged);
    }
}
