//! System cursor visibility via cursor replacement.
//!
//! `ShowCursor` only affects windows of the calling thread, and the overlay
//! lets the pointer through to other applications. Instead the common system
//! cursors are swapped for a blank one and restored from the user's scheme.

use windows::Win32::UI::WindowsAndMessaging::{
    CreateCursor, SetSystemCursor, SystemParametersInfoW, OCR_APPSTARTING, OCR_HAND, OCR_IBEAM,
    OCR_NORMAL, SPI_SETCURSORS, SYSTEM_CURSOR_ID, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

const CURSOR_EDGE: i32 = 32;
const MASK_LEN: usize = (CURSOR_EDGE * CURSOR_EDGE / 8) as usize;

const REPLACED: [SYSTEM_CURSOR_ID; 4] = [OCR_NORMAL, OCR_IBEAM, OCR_HAND, OCR_APPSTARTING];

/// Reloads the user's cursor scheme when dropped.
#[derive(Debug)]
pub struct HiddenCursor {
    _private: (),
}

pub fn hide_system_cursor() -> Result<HiddenCursor, String> {
    blank_each(&REPLACED, set_blank)
}

/// Apply `set_blank` to every id. The guard exists before the first
/// replacement, so an error part-way through restores the ones already done.
fn blank_each(
    ids: &[SYSTEM_CURSOR_ID],
    mut set_blank: impl FnMut(SYSTEM_CURSOR_ID) -> Result<(), String>,
) -> Result<HiddenCursor, String> {
    let guard = HiddenCursor { _private: () };
    for &id in ids {
        set_blank(id)?;
    }
    Ok(guard)
}

fn set_blank(id: SYSTEM_CURSOR_ID) -> Result<(), String> {
    // AND mask all ones + XOR mask all zeros = fully transparent.
    let and_plane = [0xFFu8; MASK_LEN];
    let xor_plane = [0u8; MASK_LEN];

    unsafe {
        let blank = CreateCursor(
            None,
            0,
            0,
            CURSOR_EDGE,
            CURSOR_EDGE,
            and_plane.as_ptr().cast(),
            xor_plane.as_ptr().cast(),
        )
        .map_err(|e| format!("CreateCursor failed: {}", e))?;
        // SetSystemCursor takes ownership of `blank`.
        SetSystemCursor(blank, id).map_err(|e| format!("SetSystemCursor failed: {}", e))
    }
}

fn restore_cursors() -> Result<(), String> {
    #[cfg(test)]
    tests::RESTORES.with(|n| n.set(n.get() + 1));

    unsafe {
        SystemParametersInfoW(
            SPI_SETCURSORS,
            0,
            None,
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
        .map_err(|e| format!("SystemParametersInfoW(SPI_SETCURSORS) failed: {}", e))
    }
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        if let Err(e) = restore_cursors() {
            log::warn!("[OVERLAY] {}", e);
        }
    }
}
