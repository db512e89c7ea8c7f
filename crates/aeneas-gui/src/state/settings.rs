//! Application settings - host configuration read at startup.
//!
//! Settings only describe the host: which mode to open in, where the image
//! and PDF assets live, and the window size. Showcase state is never written
//! back here.

use std::path::{Path, PathBuf};

use aeneas_model::ModeId;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// A missing file is created with defaults. A file that cannot be parsed
    /// is logged and left untouched, and defaults are used for this run.
    pub fn load() -> Self {
        Self::load_or_init(&Self::config_path())
    }

    /// Load settings from `path`, writing defaults there if it does not exist.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to(path) {
                Ok(()) => tracing::info!(path = %path.display(), "Wrote default settings"),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "Could not write default settings");
                }
            }
            return settings;
        }

        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "Using default settings");
            Self::default()
        })
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, GuiError> {
        let content = std::fs::read_to_string(path).map_err(GuiError::settings_load)?;
        toml::from_str(&content).map_err(GuiError::settings_load)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GuiError::settings_save)?;
        }

        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;
        std::fs::write(path, content).map_err(GuiError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "AeneasStudio", "Aeneas")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// GENERAL SETTINGS
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Mode selected when the app starts.
    pub initial_mode: ModeId,
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Directory that root-relative asset paths (`/work/...`, `/lab/...`)
    /// resolve against.
    pub asset_root: PathBuf,
    /// Initial window width in logical pixels.
    pub window_width: f32,
    /// Initial window height in logical pixels.
    pub window_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("./public"),
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl DisplaySettings {
    /// Resolve a root-relative asset path against [`Self::asset_root`].
    pub fn asset_path(&self, src: &str) -> PathBuf {
        self.asset_root.join(src.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn settings_file() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        (dir, path)
    }

    #[test]
    fn missing_file_is_initialised_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aeneas").join("settings.toml");

        let settings = Settings::load_or_init(&path);

        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn existing_file_is_not_rewritten() {
        let (_dir, path) = settings_file();
        let content = "[general]\ninitial_mode = \"web\"\n";
        std::fs::write(&path, content).unwrap();

        let settings = Settings::load_or_init(&path);

        assert_eq!(settings.general.initial_mode, ModeId::Web);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn corrupt_file_falls_back_and_is_left_alone() {
        let (_dir, path) = settings_file();
        std::fs::write(&path, "general = [not toml").unwrap();

        assert!(Settings::load_from(&path).is_err());
        assert_eq!(Settings::load_or_init(&path), Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "general = [not toml"
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = settings_file();
        std::fs::write(&path, "[general]\ninitial_mode = \"visual\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.general.initial_mode, ModeId::Visual);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn save_then_load() {
        let (_dir, path) = settings_file();
        let mut settings = Settings::default();
        settings.general.initial_mode = ModeId::Web;
        settings.display.asset_root = PathBuf::from("/srv/aeneas");

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn asset_paths_are_rooted() {
        let display = DisplaySettings {
            asset_root: PathBuf::from("assets"),
            ..DisplaySettings::default()
        };
        assert_eq!(
            display.asset_path("/work/zigzag/01-shooting-guide.jpg"),
            PathBuf::from("assets/work/zigzag/01-shooting-guide.jpg")
        );
    }
}
