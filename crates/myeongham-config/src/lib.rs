//! User configuration loading for the myeongham portfolio card.
//!
//! Presentation preferences live in a TOML file under the platform config
//! directory. A missing file is the normal case and yields the defaults;
//! an unreadable file is logged and ignored. Animation behavior is not
//! configurable.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use myeongham_core::{BackgroundMode, ColorTheme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Presentation preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accent color for text and borders.
    pub theme: ColorTheme,
    /// Ambient background mode.
    pub background: BackgroundMode,
}

impl Config {
    /// Platform config file path, e.g. `~/.config/myeongham/config.toml`.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "myeongham").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the user config, falling back to defaults when no file exists
    /// or the file cannot be used.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Load a config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ColorTheme::Magenta);
        assert_eq!(config.background, BackgroundMode::Drift);
    }

    #[test]
    fn test_load_from_parses_preferences() {
        let path = temp_file(
            "myeongham-config-ok.toml",
            "theme = \"cyan\"\nbackground = \"off\"\n",
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ColorTheme::Cyan);
        assert_eq!(config.background, BackgroundMode::Off);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_fills_missing_fields() {
        let path = temp_file("myeongham-config-partial.toml", "theme = \"green\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ColorTheme::Green);
        assert_eq!(config.background, BackgroundMode::Drift);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let path = temp_file("myeongham-config-bad.toml", "theme = ");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("myeongham-config-does-not-exist.toml");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));
    }
}
