//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the persisted settings, the cursor asset list and
//! configuration constants.
//!
//! File persistence is in `storage`.

pub mod constants;
pub mod cursors;
pub mod settings;

pub use constants::*;
pub use cursors::{cursor_at, CursorDescriptor, CURSORS};
pub use settings::{Settings, Volume};
