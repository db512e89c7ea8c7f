//! Tests for the showcase state machine.

use aeneas_core::{DetailView, Rejection, Showcase, ShowcaseState, Transition, VisualRef};
use aeneas_model::{
    ContentCatalog, LabItem, ModeConfig, ModeId, ProjectDetail, ProjectId, ProjectVisual,
    StudioCatalog, StudioCopy, TileBoardSpec,
};
use proptest::prelude::*;

/// One user intent, as the presentation layer would send it.
#[derive(Debug, Clone, Copy)]
enum Event {
    SelectMode(ModeId),
    SelectProject(ProjectId),
    CloseProject,
    ToggleDetailView,
    OpenVisual(VisualRef),
    CloseVisual,
}

fn apply<C: ContentCatalog>(showcase: &mut Showcase<C>, event: Event) -> Transition {
    match event {
        Event::SelectMode(mode) => showcase.select_mode(mode),
        Event::SelectProject(project) => showcase.select_project(project),
        Event::CloseProject => showcase.close_project(),
        Event::ToggleDetailView => showcase.toggle_detail_view(),
        Event::OpenVisual(visual) => showcase.open_visual(visual),
        Event::CloseVisual => showcase.close_visual(),
    }
}

fn mode() -> impl Strategy<Value = ModeId> {
    prop::sample::select(ModeId::ALL.to_vec())
}

fn project() -> impl Strategy<Value = ProjectId> {
    prop::sample::select(ProjectId::ALL.to_vec())
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        mode().prop_map(Event::SelectMode),
        project().prop_map(Event::SelectProject),
        Just(Event::CloseProject),
        Just(Event::ToggleDetailView),
        // Indices past the end of every gallery are included on purpose.
        (project(), 0usize..8).prop_map(|(p, i)| Event::OpenVisual(VisualRef::new(p, i))),
        Just(Event::CloseVisual),
    ]
}

fn reached_by(events: &[Event]) -> Showcase {
    let mut showcase = Showcase::default();
    for event in events {
        apply(&mut showcase, *event);
    }
    showcase
}

fn zoom_is_consistent(showcase: &Showcase) -> bool {
    match showcase.zoomed_visual() {
        None => true,
        Some(visual) => {
            showcase.active_project() == Some(visual.project)
                && visual.index < StudioCatalog.visuals(visual.project).len()
        }
    }
}

proptest! {
    #[test]
    fn mode_changes_nothing_else(events in prop::collection::vec(event(), 0..30), m in mode()) {
        let mut showcase = reached_by(&events);
        let before = showcase.state();
        showcase.select_mode(m);
        let after = showcase.state();

        prop_assert_eq!(after, ShowcaseState { active_mode: m, ..before });
    }

    #[test]
    fn switching_project_resets_view_and_zoom(
        events in prop::collection::vec(event(), 0..30),
        next in project(),
    ) {
        let mut showcase = reached_by(&events);
        prop_assume!(showcase.active_project().is_some());
        prop_assume!(showcase.active_project() != Some(next));

        showcase.select_project(next);
        prop_assert_eq!(showcase.active_project(), Some(next));
        prop_assert_eq!(showcase.detail_view(), DetailView::Case);
        prop_assert_eq!(showcase.zoomed_visual(), None);
    }

    #[test]
    fn close_resets_everything_but_mode(events in prop::collection::vec(event(), 0..30)) {
        let mut showcase = reached_by(&events);
        let mode = showcase.active_mode();
        showcase.close_project();

        prop_assert_eq!(
            showcase.state(),
            ShowcaseState { active_mode: mode, ..ShowcaseState::default() }
        );
    }

    #[test]
    fn zoom_always_belongs_to_open_project(events in prop::collection::vec(event(), 0..60)) {
        let mut showcase = Showcase::default();
        for event in events {
            apply(&mut showcase, event);
            prop_assert!(zoom_is_consistent(&showcase), "after {:?}: {:?}", event, showcase.state());
        }
    }

    #[test]
    fn double_toggle_restores_view(events in prop::collection::vec(event(), 0..30)) {
        let mut showcase = reached_by(&events);
        prop_assume!(showcase.active_project().is_some());
        let before = showcase.detail_view();

        showcase.toggle_detail_view();
        prop_assert_ne!(showcase.detail_view(), before);
        showcase.toggle_detail_view();
        prop_assert_eq!(showcase.detail_view(), before);
    }

    #[test]
    fn rejected_operations_leave_state_alone(
        events in prop::collection::vec(event(), 0..30),
        next in event(),
    ) {
        let mut showcase = reached_by(&events);
        let before = showcase.state();
        let result = apply(&mut showcase, next);

        if matches!(result, Transition::Rejected(_) | Transition::Unchanged) {
            prop_assert_eq!(showcase.state(), before);
        } else {
            prop_assert_ne!(showcase.state(), before);
        }
    }
}

#[test]
fn zigzag_then_gmarket_scenario() {
    let mut showcase = Showcase::default();

    assert_eq!(showcase.select_project(ProjectId::Zigzag), Transition::Applied);
    assert_eq!(showcase.active_project(), Some(ProjectId::Zigzag));
    assert_eq!(showcase.detail_view(), DetailView::Case);
    assert_eq!(showcase.zoomed_visual(), None);

    assert_eq!(showcase.toggle_detail_view(), Transition::Applied);
    assert_eq!(showcase.detail_view(), DetailView::Visual);

    let second = VisualRef::new(ProjectId::Zigzag, 1);
    assert_eq!(showcase.open_visual(second), Transition::Applied);
    assert_eq!(showcase.zoomed_visual(), Some(second));

    assert_eq!(showcase.select_project(ProjectId::Gmarket), Transition::Applied);
    assert_eq!(
        showcase.state(),
        ShowcaseState {
            active_mode: ModeId::Brand,
            active_project: Some(ProjectId::Gmarket),
            detail_view: DetailView::Case,
            zoomed_visual: None,
        }
    );
}

/// Studio content with every gallery cut down to its first image.
struct FirstVisualOnly {
    inner: StudioCatalog,
}

impl ContentCatalog for FirstVisualOnly {
    fn mode(&self, id: ModeId) -> &ModeConfig {
        self.inner.mode(id)
    }

    fn project(&self, id: ProjectId) -> &ProjectDetail {
        self.inner.project(id)
    }

    fn visuals(&self, id: ProjectId) -> &[ProjectVisual] {
        &self.inner.visuals(id)[..1]
    }

    fn board(&self, id: ProjectId) -> &TileBoardSpec {
        self.inner.board(id)
    }

    fn lab_items(&self) -> &[LabItem] {
        self.inner.lab_items()
    }

    fn copy(&self) -> &StudioCopy {
        self.inner.copy()
    }
}

#[test]
fn gallery_membership_comes_from_the_catalog() {
    let mut showcase = Showcase::new(FirstVisualOnly {
        inner: StudioCatalog,
    });
    showcase.select_project(ProjectId::Zigzag);

    assert_eq!(
        showcase.open_visual(VisualRef::new(ProjectId::Zigzag, 1)),
        Transition::Rejected(Rejection::ForeignVisual {
            project: ProjectId::Zigzag,
            index: 1,
        })
    );
    assert_eq!(
        showcase.open_visual(VisualRef::new(ProjectId::Zigzag, 0)),
        Transition::Applied
    );
}
