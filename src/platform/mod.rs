//! Platform-specific implementations.
//!
//! - Display enumeration (all platforms, via `xcap`)
//! - System cursor visibility (macOS: CoreGraphics, Windows: Win32,
//!   Linux: XFixes; other platforms leave the cursor visible)
//!
//! Each platform module exports `hide_system_cursor`, which returns a
//! `HiddenCursor` guard. Dropping the guard restores the cursor.

pub mod displays;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

pub use displays::{list_screens, ScreenInfo};

/// Hides and restores the OS cursor while an overlay is shown.
///
/// Implementations must not rely on being dropped to restore the cursor;
/// the overlay calls [`show`](SystemCursor::show) on every teardown path.
pub trait SystemCursor {
    fn hide(&mut self);
    fn show(&mut self);
}

/// The real OS cursor. Hide and show calls are balanced.
#[derive(Debug, Default)]
pub struct NativeCursor {
    hidden: Option<HiddenCursor>,
}

impl SystemCursor for NativeCursor {
    fn hide(&mut self) {
        if self.hidden.is_some() {
            return;
        }
        match hide_system_cursor() {
            Ok(guard) => self.hidden = Some(guard),
            Err(e) => log::warn!("[OVERLAY] cannot hide system cursor: {}", e),
        }
    }

    fn show(&mut self) {
        self.hidden = None;
    }
}

#[cfg(target_os = "macos")]
use self::macos::{hide_system_cursor, HiddenCursor};

#[cfg(target_os = "windows")]
use self::windows::{hide_system_cursor, HiddenCursor};

#[cfg(target_os = "linux")]
use self::linux::{hide_system_cursor, HiddenCursor};

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
#[derive(Debug)]
struct HiddenCursor;

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn hide_system_cursor() -> Result<HiddenCursor, String> {
    log::debug!("[OVERLAY] system cursor hiding is not supported on this platform");
    Ok(HiddenCursor)
}
