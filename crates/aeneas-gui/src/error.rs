//! GUI-specific error types.
//!
//! Nothing here is fatal. Errors are logged where they happen and the app
//! keeps running on defaults.

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to read or parse the settings file.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to write the settings file.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // LINKS
    // =========================================================================
    /// The OS refused to open a link target.
    #[error("Failed to open '{target}': {reason}")]
    OpenLink {
        /// URL or path that was passed to the OS.
        target: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Settings were reset to defaults; fix or delete the settings file.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::OpenLink { .. } => {
                Some("Check that a browser, mail client or PDF viewer is installed.")
            }
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a settings load error from any error source.
    pub fn settings_load(err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Create a link error.
    pub fn open_link(target: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::OpenLink {
            target: target.into(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_reason() {
        let err = GuiError::open_link("/tmp/a.pdf", "no handler");
        assert_eq!(err.to_string(), "Failed to open '/tmp/a.pdf': no handler");
        assert!(err.suggestion().is_some());
    }
}
