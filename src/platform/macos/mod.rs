//! macOS-specific implementation using CoreGraphics.

pub mod cursor;

pub use cursor::{hide_system_cursor, HiddenCursor};
