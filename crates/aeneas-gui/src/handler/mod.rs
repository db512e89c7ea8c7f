//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Showcase(msg) => ShowcaseHandler.handle(&mut self.state, msg),
//!         Message::OpenLink(href) => LinkHandler.handle(&mut self.state, href),
//!         // ...
//!     }
//! }
//! ```

mod keyboard;
mod link;
mod showcase;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use keyboard::{KeyboardHandler, shortcut};
pub use link::{LinkHandler, LinkTarget, resolve_link};
pub use showcase::{ShowcaseHandler, apply};

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// # Returns
    ///
    /// A `Task<Message>` for any follow-up work, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
