//! Settings file access.
//!
//! Settings live in a JSON file in the user's config directory
//! (e.g. `~/.config/bag/settings.json`). A missing file means defaults;
//! every field is optional.

use crate::lexicon::{Language, Subject};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "bag";

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Error types for settings access
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Failed to load settings: {0}")]
    LoadError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Language used when none is given on the command line
    pub language: Language,
    /// Subject used when none is given on the command line
    pub subject: Subject,
    /// Lexicon file; the bundled word list when unset
    pub lexicon_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
}

/// Get the default settings file path.
///
/// # Returns
/// `<config dir>/bag/settings.json`
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(DEFAULT_SETTINGS_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        crate::debug!("Loading settings from {:?}", path);

        if !path.exists() {
            crate::debug!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| SettingsError::LoadError(e.to_string()))?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::LoadError(e.to_string()))?;

        crate::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the default path, or defaults when there is no
    /// config directory on this platform.
    pub fn load_default() -> Result<Self, SettingsError> {
        match default_settings_path() {
            Ok(path) => Self::load(&path),
            Err(e) => {
                crate::warn!("{}, using default settings", e);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
