//! Keyboard shortcut handler.
//!
//! Handles:
//! - Escape (close the zoom overlay, then the open project)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use super::MessageHandler;
use crate::message::{Message, ShowcaseMessage};
use crate::state::AppState;

/// Maps key presses to showcase messages.
pub struct KeyboardHandler;

impl MessageHandler<keyboard::Key> for KeyboardHandler {
    fn handle(&self, state: &mut AppState, key: keyboard::Key) -> Task<Message> {
        match shortcut(state, &key) {
            Some(msg) => Task::done(Message::Showcase(msg)),
            None => Task::none(),
        }
    }
}

/// The showcase message bound to `key` in the current state, if any.
pub fn shortcut(state: &AppState, key: &keyboard::Key) -> Option<ShowcaseMessage> {
    match key.as_ref() {
        // Escape peels one layer at a time
        keyboard::Key::Named(Named::Escape) => {
            if state.showcase.zoomed_visual().is_some() {
                Some(ShowcaseMessage::CloseVisual)
            } else if state.showcase.active_project().is_some() {
                Some(ShowcaseMessage::CloseProject)
            } else {
                None
            }
        }
        _ => None,
    }
}
