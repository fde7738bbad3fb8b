//! JSON settings file.
//!
//! Stores settings in `settings.json` beside the executable. Every mutation
//! is written through synchronously; there is no cache to flush.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SettingsError;
use crate::model::constants::SETTINGS_FILE_NAME;
use crate::model::Settings;

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location beside the running executable.
    pub fn beside_executable() -> Self {
        Self::new(crate::program_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, returning defaults if the file is missing or invalid.
    ///
    /// Readable keys of a partial file are kept; everything else comes from
    /// the defaults. This never fails.
    pub fn load(&self) -> Settings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::debug!(
                    "[SETTINGS] {} not readable ({}), using defaults",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => Settings::from_json(value),
            Err(e) => {
                log::debug!(
                    "[SETTINGS] {} is malformed ({}), using defaults",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Write the full settings object, replacing the file.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        log::debug!("[SETTINGS] saved {:?}", settings);
        Ok(())
    }
}
