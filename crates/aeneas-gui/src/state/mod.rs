//! Application state.
//!
//! [`AppState`] pairs the showcase state machine with the host settings. The
//! showcase is only mutated through its own operations, from the message
//! handlers.

pub mod settings;

use aeneas_core::{Showcase, ShowcaseView};
use aeneas_model::StudioCatalog;

pub use settings::{DisplaySettings, GeneralSettings, Settings};

/// All application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mode, open project, detail sub-view and zoom.
    pub showcase: Showcase<StudioCatalog>,

    /// Host settings loaded at startup.
    pub settings: Settings,
}

impl AppState {
    /// Create state from loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            showcase: Showcase::with_initial_mode(StudioCatalog, settings.general.initial_mode),
            settings,
        }
    }

    /// Derive the view model for the current frame.
    pub fn view_model(&self) -> ShowcaseView<'_> {
        ShowcaseView::build(&self.showcase)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
