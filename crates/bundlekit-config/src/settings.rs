//! Workflow settings persisted as `<data>/settings.yaml`.
//!
//! Settings hold the user's icon colour and the icon font. All fields have
//! serde defaults so a partial or missing file loads cleanly.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use bundlekit_core::catalog::FONT_AWESOME;
use bundlekit_core::colour::Colour;

/// File name of the settings file inside the data directory.
const SETTINGS_FILE: &str = "settings.yaml";

/// Errors that can occur during settings and directory operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained invalid YAML.
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No home directory could be determined for the fallback paths.
    #[error("no home directory found and no workflow directories set in the environment")]
    NoHomeDir,
}

/// A specialized `Result` type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Persisted workflow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Icon colour used for rendering results.
    #[serde(default)]
    pub colour: Colour,

    /// Icon font requested from the icon service.
    #[serde(default = "default_font")]
    pub font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            colour: Colour::default(),
            font: default_font(),
        }
    }
}

fn default_font() -> String {
    FONT_AWESOME.to_string()
}

/// Load settings from `settings.yaml` inside the given data directory.
///
/// A missing or empty file yields [`Settings::default`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if it contains invalid YAML (including an invalid
/// colour value).
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let path = data_dir.join(SETTINGS_FILE);

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&content)?;
    Ok(settings)
}

/// Save settings to `settings.yaml`, creating the data directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] on I/O failure or [`ConfigError::Parse`] if
/// serialization fails.
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let path = data_dir.join(SETTINGS_FILE);
    let yaml = serde_yaml::to_string(settings)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.colour.as_str(), "444444");
        assert_eq!(settings.font, "fontawesome");
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/bundlekit");
        let settings = load_settings(&dir).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");

        let settings = Settings {
            colour: Colour::parse("#FF8800").unwrap(),
            font: "fontawesome".to_string(),
        };
        save_settings(&data_dir, &settings).unwrap();

        let loaded = load_settings(&data_dir).unwrap();
        assert_eq!(loaded.colour.as_str(), "ff8800");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let settings: Settings = serde_yaml::from_str("colour: \"123\"\n").unwrap();
        assert_eq!(settings.colour.as_str(), "123");
        assert_eq!(settings.font, "fontawesome");
    }

    #[test]
    fn empty_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("settings.yaml"), "  \n").unwrap();
        let settings = load_settings(tmp.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_colour_in_file_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("settings.yaml"), "colour: \"purple\"\n").unwrap();
        let err = load_settings(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
