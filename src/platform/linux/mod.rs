//! Linux-specific implementation using Xlib and XFixes.

pub mod cursor;

pub use cursor::{hide_system_cursor, HiddenCursor};
