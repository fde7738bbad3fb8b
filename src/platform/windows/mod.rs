//! Windows-specific implementation using the Win32 API.

pub mod cursor;

pub use cursor::{hide_system_cursor, HiddenCursor};
