//! Message module for AENEAS Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod showcase;

use iced::keyboard;

pub use showcase::ShowcaseMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Showcase state machine messages
    Showcase(ShowcaseMessage),

    /// Open an external link (URL, `mailto:` or asset path)
    OpenLink(String),

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation
    Noop,
}

impl From<ShowcaseMessage> for Message {
    fn from(msg: ShowcaseMessage) -> Self {
        Self::Showcase(msg)
    }
}
