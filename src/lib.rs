//! Presentation pointer: a click-through cursor overlay with click and hold
//! sound cues.
//!
//! The overlay state machine ([`overlay::OverlayController`]) is generic
//! over its pointer, audio and cursor collaborators so it runs in tests
//! without a display or audio device.

pub mod app;
pub mod audio;
pub mod error;
pub mod events;
pub mod handlers;
pub mod input;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod storage;
pub mod ui;

use std::path::PathBuf;

pub use error::{PointerError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Settings, Volume};

/// Clamp a stored monitor index to the displays actually present.
///
/// Returns `None` when there are no displays at all.
pub fn resolve_screen_index(selected: usize, screen_count: usize) -> Option<usize> {
    screen_count.checked_sub(1).map(|last| selected.min(last))
}

/// Directory containing the running executable, or the working directory.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Bundled assets: beside the executable, else `./assets`.
pub fn assets_dir() -> PathBuf {
    let beside_exe = program_dir().join(model::ASSETS_DIR_NAME);
    if beside_exe.is_dir() {
        beside_exe
    } else {
        PathBuf::from(model::ASSETS_DIR_NAME)
    }
}
