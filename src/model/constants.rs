//! Configuration constants and default values.
//!
//! This module contains all application constants including timing, visual
//! transforms, settings defaults, JSON keys and asset file names.

use std::time::Duration;

// === Timing ===

/// Mouse polling period while an overlay is active.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

// === Visual Defaults ===

/// Cursor rotation in degrees while the left button is held.
pub const PRESSED_ROTATION_DEG: f32 = -15.0;

/// Cursor rotation in degrees at rest.
pub const REST_ROTATION_DEG: f32 = 0.0;

/// Overlay cursor size relative to the native image size.
pub const CURSOR_SCALE: f32 = 0.4;

/// Edge length of the cursor thumbnails in the main window.
pub const THUMBNAIL_SIZE: u32 = 80;

// === Settings Defaults ===

/// Default playback volume (percent).
pub const DEFAULT_VOLUME: u8 = 100;

/// Default monitor index.
pub const DEFAULT_SELECTED_SCREEN: usize = 0;

/// Maximum playback volume (percent).
pub const MAX_VOLUME: u8 = 100;

// === Settings Keys ===

/// JSON key for the playback volume.
pub const KEY_VOLUME: &str = "volume";

/// JSON key for the selected monitor index.
pub const KEY_SELECTED_SCREEN: &str = "selected_screen";

// === Files ===

/// Settings file name, stored beside the executable.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Assets directory name, stored beside the executable.
pub const ASSETS_DIR_NAME: &str = "assets";

/// Click sound played once per press.
pub const SOUND_CLICK_FILE: &str = "knock.wav";

/// Sound looped while the button is held.
pub const SOUND_HOLD_FILE: &str = "hold.wav";
