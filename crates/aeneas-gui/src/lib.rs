//! AENEAS Studio - GUI Library
//!
//! The desktop rendition of the studio showcase: hero, constellation modes,
//! project boards with their case studies, Studio Lab and contact footer.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
