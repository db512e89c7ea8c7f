//! Main application module for AENEAS Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Showcase state only changes through its own operations** - handlers
//!   forward messages, they never poke fields

mod subscription;

use aeneas_model::ContentCatalog;
use iced::{Element, Subscription, Task, Theme};

use crate::handler::{KeyboardHandler, LinkHandler, MessageHandler, ShowcaseHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::studio_theme;
use crate::view::view_showcase;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    state: AppState,
}

impl App {
    /// Create the application from loaded settings.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        tracing::info!(
            initial_mode = %settings.general.initial_mode,
            asset_root = %settings.display.asset_root.display(),
            "Showcase ready"
        );

        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Read-only access to the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(msg) => ShowcaseHandler.handle(&mut self.state, msg),
            Message::OpenLink(href) => LinkHandler.handle(&mut self.state, href),
            Message::KeyPressed(key, _modifiers) => KeyboardHandler.handle(&mut self.state, key),
            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_showcase(&self.state)
    }

    /// Window title: studio name and the active mode.
    pub fn title(&self) -> String {
        let catalog = self.state.showcase.catalog();
        let mode = catalog.mode(self.state.showcase.active_mode());
        format!("{} · {}", catalog.copy().brand_name, mode.tab_label)
    }

    /// The studio theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }

    /// Event subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription()
    }
}

#[cfg(test)]
mod tests {
    use aeneas_model::{ModeId, ProjectId};

    use super::*;
    use crate::message::ShowcaseMessage;

    #[test]
    fn title_follows_active_mode() {
        let (mut app, _) = App::new(Settings::default());
        assert_eq!(app.title(), "AENEAS Studio · BRAND CORE");

        let _ = app.update(ShowcaseMessage::SelectMode(ModeId::Visual).into());
        assert_eq!(app.title(), "AENEAS Studio · VISUAL SYSTEMS");
    }

    #[test]
    fn initial_mode_comes_from_settings() {
        let mut settings = Settings::default();
        settings.general.initial_mode = ModeId::Web;
        let (app, _) = App::new(settings);
        assert_eq!(app.state().showcase.active_mode(), ModeId::Web);
    }

    #[test]
    fn placeholder_links_leave_state_alone() {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(ShowcaseMessage::SelectProject(ProjectId::Gmarket).into());
        let before = app.state().showcase.state();

        let _ = app.update(Message::OpenLink("#".to_string()));
        let _ = app.update(Message::Noop);
        assert_eq!(app.state().showcase.state(), before);
    }
}
