//! System cursor visibility via CoreGraphics.
//!
//! `CGDisplayHideCursor` keeps a per-application hide count, so every hide
//! must be balanced by exactly one show. The guard does the show.

use core_graphics::display::CGDisplay;

/// Shows the cursor again when dropped.
#[derive(Debug)]
pub struct HiddenCursor {
    _private: (),
}

pub fn hide_system_cursor() -> Result<HiddenCursor, String> {
    CGDisplay::main()
        .hide_cursor()
        .map_err(|e| format!("CGDisplayHideCursor failed ({})", e))?;
    Ok(HiddenCursor { _private: () })
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        if let Err(e) = CGDisplay::main().show_cursor() {
            log::warn!("[OVERLAY] CGDisplayShowCursor failed ({})", e);
        }
    }
}
