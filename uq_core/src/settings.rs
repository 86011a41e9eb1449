//! # Application Settings
//!
//! User preferences stored as TOML in the platform config directory
//! (`<config_dir>/uq-workflow/settings.toml`). Every field has a default, so
//! a missing or partial file is fine; a malformed file is logged and
//! ignored.
//!
//! ```toml
//! window_width = 1440.0
//! window_height = 900.0
//! dark_mode = true
//! restore_all_panels_on_load = false
//! default_open_dir = "/home/me/workflows"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{UqError, UqResult};
use crate::panels::RestoreScope;

const APP_DIR: &str = "uq-workflow";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    pub dark_mode: bool,
    /// Also restore the FEM and sampling panels when opening a file
    pub restore_all_panels_on_load: bool,
    /// Starting directory for open/save dialogs
    pub default_open_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_width: 1280.0,
            window_height: 860.0,
            dark_mode: false,
            restore_all_panels_on_load: false,
            default_open_dir: None,
        }
    }
}

impl Settings {
    /// Location of the settings file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Settings {
        match Settings::default_path() {
            Some(path) => Settings::load_from(&path),
            None => {
                debug!("no config directory on this platform; using default settings");
                Settings::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Settings {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("settings not read from {}: {}", path.display(), e);
                return Settings::default();
            }
        };
        match Settings::parse(&text) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn parse(text: &str) -> UqResult<Settings> {
        toml::from_str(text).map_err(|e| UqError::serialization(e.to_string()))
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> UqResult<()> {
        let text = toml::to_string_pretty(self).map_err(|e| UqError::serialization(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                UqError::file_error("create directory", parent.display().to_string(), e.to_string())
            })?;
        }
        fs::write(path, text)
            .map_err(|e| UqError::file_error("write", path.display().to_string(), e.to_string()))
    }

    /// Which panels `Session::load_file` restores
    pub fn restore_scope(&self) -> RestoreScope {
        if self.restore_all_panels_on_load {
            RestoreScope::All
        } else {
            RestoreScope::Primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse("dark_mode = true\n").unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.window_width, 1280.0);
        assert_eq!(settings.restore_scope(), RestoreScope::Primary);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "window_width = \"wide\"").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        assert_eq!(
            Settings::load_from(&dir.path().join("absent.toml")),
            Settings::default()
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            restore_all_panels_on_load: true,
            default_open_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded, settings);
        assert_eq!(reloaded.restore_scope(), RestoreScope::All);
    }
}
