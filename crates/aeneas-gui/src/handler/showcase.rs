//! Showcase message handler.

use aeneas_core::{Showcase, Transition};
use aeneas_model::ContentCatalog;
use iced::Task;

use super::MessageHandler;
use crate::message::{Message, ShowcaseMessage};
use crate::state::AppState;

/// Forwards showcase messages to the state machine.
pub struct ShowcaseHandler;

impl MessageHandler<ShowcaseMessage> for ShowcaseHandler {
    fn handle(&self, state: &mut AppState, msg: ShowcaseMessage) -> Task<Message> {
        apply(&mut state.showcase, msg);
        Task::none()
    }
}

/// Run the operation named by `msg`.
pub fn apply<C: ContentCatalog>(showcase: &mut Showcase<C>, msg: ShowcaseMessage) -> Transition {
    match msg {
        ShowcaseMessage::SelectMode(mode) => showcase.select_mode(mode),
        ShowcaseMessage::SelectProject(project) => showcase.select_project(project),
        ShowcaseMessage::CloseProject => showcase.close_project(),
        ShowcaseMessage::ToggleDetailView => showcase.toggle_detail_view(),
        ShowcaseMessage::OpenVisual(visual) => showcase.open_visual(visual),
        ShowcaseMessage::CloseVisual => showcase.close_visual(),
    }
}

#[cfg(test)]
mod tests {
    use aeneas_core::{DetailView, VisualRef};
    use aeneas_model::{ModeId, ProjectId};

    use super::*;

    #[test]
    fn messages_drive_the_state_machine() {
        let mut state = AppState::default();
        let handler = ShowcaseHandler;

        let _ = handler.handle(&mut state, ShowcaseMessage::SelectMode(ModeId::Web));
        let _ = handler.handle(&mut state, ShowcaseMessage::SelectProject(ProjectId::Zigzag));
        let _ = handler.handle(&mut state, ShowcaseMessage::ToggleDetailView);
        let _ = handler.handle(
            &mut state,
            ShowcaseMessage::OpenVisual(VisualRef::new(ProjectId::Zigzag, 4)),
        );

        let showcase = &state.showcase;
        assert_eq!(showcase.active_mode(), ModeId::Web);
        assert_eq!(showcase.detail_view(), DetailView::Visual);
        assert_eq!(
            showcase.zoomed_visual(),
            Some(VisualRef::new(ProjectId::Zigzag, 4))
        );

        let _ = handler.handle(&mut state, ShowcaseMessage::CloseProject);
        assert_eq!(state.showcase.active_project(), None);
        assert_eq!(state.showcase.zoomed_visual(), None);
        assert_eq!(state.showcase.active_mode(), ModeId::Web);
    }

    #[test]
    fn apply_reports_transition() {
        let mut state = AppState::default();
        assert_eq!(
            apply(&mut state.showcase, ShowcaseMessage::CloseVisual),
            Transition::Unchanged
        );
        assert!(apply(&mut state.showcase, ShowcaseMessage::SelectProject(ProjectId::Travel)).is_applied());
    }
}
