//! # Settings
//!
//! Native front ends read `settings.json` from the platform config directory
//! (`~/.config/casefile/settings.json` on Linux). Every field is optional in
//! the file. The data directory can also be overridden with the
//! `CASEFILE_DATA_DIR` environment variable or by the caller (the CLI's
//! `--data-dir`).
//!
//! ```json
//! {
//!   "data_dir": "/home/me/.local/share/casefile",
//!   "dates": { "date": "%-m/%-d/%Y", "datetime": "%-m/%-d/%Y, %-I:%M:%S %p" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dates::DateStyle;
use crate::errors::{CaseError, CaseResult};
use crate::file_io::write_atomic;

/// Environment variable overriding [`Settings::data_dir`]
pub const DATA_DIR_ENV: &str = "CASEFILE_DATA_DIR";

/// Name of the store file inside the data directory
pub const STORE_FILE_NAME: &str = "casefile.json";

const APP_DIR: &str = "casefile";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the store file and exports
    pub data_dir: PathBuf,
    /// Formats used when stamping new entries
    pub dates: DateStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
            dates: DateStyle::default(),
        }
    }
}

impl Settings {
    /// Location of `settings.json`, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the default location, then apply `CASEFILE_DATA_DIR`.
    pub fn load() -> Self {
        let mut settings = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            settings.data_dir = PathBuf::from(dir);
        }
        settings
    }

    /// Load settings from `path`, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Settings loaded from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::error!("Failed to parse settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` (atomically), creating parent directories.
    pub fn save_to(&self, path: &Path) -> CaseResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CaseError::file_error("create directory", parent.display().to_string(), e.to_string())
            })?;
        }
        write_atomic(path, &serde_json::to_string_pretty(self)?)
    }

    /// Path of the key-value store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            data_dir: dir.path().join("data"),
            dates: DateStyle {
                date: "%Y-%m-%d".to_string(),
                ..DateStyle::default()
            },
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        assert_eq!(settings.store_path(), dir.path().join("data").join("casefile.json"));
    }

    #[test]
    fn test_partial_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let partial = dir.path().join("partial.json");
        fs::write(&partial, r#"{"data_dir":"/srv/casefile"}"#).unwrap();
        let settings = Settings::load_from(&partial);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/casefile"));
        assert_eq!(settings.dates, DateStyle::default());

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "{oops").unwrap();
        assert_eq!(Settings::load_from(&invalid), Settings::default());
    }
}
