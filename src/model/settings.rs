//! Persisted user settings (pure Rust, no FFI).
//!
//! `Settings` is decoded leniently from a JSON value so a partial or
//! partly-invalid file still yields every readable key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::constants::*;

/// Playback volume in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(u8);

impl Volume {
    /// Builds a volume, clamping anything above 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(MAX_VOLUME))
    }

    /// Builds a volume from any integer, clamping into `0..=100`.
    pub fn saturating_from(value: i64) -> Self {
        Self(value.clamp(0, MAX_VOLUME as i64) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Linear gain for the audio backend.
    pub fn gain(self) -> f32 {
        self.0 as f32 / MAX_VOLUME as f32
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// User settings, persisted to `settings.json` on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Click and hold playback volume.
    pub volume: Volume,
    /// Monitor index the overlay opens on. Clamped at point of use.
    pub selected_screen: usize,
    /// Keys found in the file that this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: Volume::default(),
            selected_screen: DEFAULT_SELECTED_SCREEN,
            extra: Map::new(),
        }
    }
}

impl Settings {
    /// Decodes settings from a parsed JSON document.
    ///
    /// Anything that is not an object yields the defaults. Known keys with an
    /// unusable value fall back to their default individually.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let mut settings = Self::default();
        if let Some(v) = map.remove(KEY_VOLUME).as_ref().and_then(Value::as_i64) {
            settings.volume = Volume::saturating_from(v);
        }
        if let Some(s) = map
            .remove(KEY_SELECTED_SCREEN)
            .as_ref()
            .and_then(Value::as_u64)
        {
            settings.selected_screen = s as usize;
        }
        settings.extra = map;
        settings
    }

    /// Resolves `selected_screen` against the current display count.
    pub fn screen_index(&self, screen_count: usize) -> Option<usize> {
        crate::resolve_screen_index(self.selected_screen, screen_count)
    }
}
