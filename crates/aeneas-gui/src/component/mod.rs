//! Reusable UI components for AENEAS Studio.
//!
//! - **Layout**: `SectionCard`, `tab_rail`
//! - **Overlays**: `overlay`
//! - **Display**: `chip`, `tool_badge`, `spans`, `keycap_board`
//! - **Icons**: Use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components return `Element<M>` and stay generic over the message type.

mod badge;
mod board;
mod overlay;
mod rich;
mod section_card;
mod tab_rail;

pub use badge::{chip, tool_badge};
pub use board::keycap_board;
pub use overlay::overlay;
pub use rich::spans;
pub use section_card::SectionCard;
pub use tab_rail::{Tab, tab_rail};
