//! Global pointer polling.
//!
//! The overlay never consumes mouse events; it samples the global pointer
//! position and left-button level on a timer instead.

use device_query::{DeviceQuery, DeviceState};

use crate::error::PointerError;

/// One reading of the global pointer in physical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub position: (i32, i32),
    pub left_down: bool,
}

/// Anything that can report the current global pointer state.
pub trait PointerSource {
    fn sample(&mut self) -> PointerSample;
}

/// Production source backed by `device_query`.
pub struct DevicePointer {
    device_state: DeviceState,
}

impl DevicePointer {
    /// Connect to the OS pointer.
    ///
    /// Fails without an X display on Linux, or without accessibility
    /// permission on macOS.
    pub fn new() -> Result<Self, PointerError> {
        let device_state = DeviceState::checked_new().ok_or(PointerError::PointerUnavailable)?;
        Ok(Self { device_state })
    }
}

impl PointerSource for DevicePointer {
    fn sample(&mut self) -> PointerSample {
        let mouse = self.device_state.get_mouse();
        // Index 0 is unused; 1 is the left button on every backend.
        let left_down = mouse.button_pressed.get(1).copied().unwrap_or(false);
        PointerSample {
            position: mouse.coords,
            left_down,
        }
    }
}
