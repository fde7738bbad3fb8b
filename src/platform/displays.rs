//! Display enumeration and coordinate conversion.

use xcap::Monitor;

use crate::error::PointerError;

/// Geometry of one display, as reported by the OS.
///
/// Coordinates are in the same space as the global pointer position
/// (physical pixels on Windows and X11, points on macOS).
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenInfo {
    pub index: usize,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub scale_factor: f32,
    pub is_primary: bool,
}

impl ScreenInfo {
    /// Convert a global position into one relative to this display's origin.
    pub fn to_local(&self, (x, y): (i32, i32)) -> (i32, i32) {
        (x - self.x, y - self.y)
    }

    /// Label shown in the monitor selector.
    pub fn label(&self) -> String {
        if self.is_primary {
            format!("Monitor {} (primary)", self.index + 1)
        } else {
            format!("Monitor {}", self.index + 1)
        }
    }

    /// Device pixels per UI point for this display.
    pub fn pixels_per_point(&self) -> f32 {
        if cfg!(target_os = "macos") || self.scale_factor <= 0.0 {
            1.0
        } else {
            self.scale_factor
        }
    }

    /// Top-left corner in UI points.
    pub fn origin_points(&self) -> [f32; 2] {
        let ppp = self.pixels_per_point();
        [self.x as f32 / ppp, self.y as f32 / ppp]
    }

    /// Size in UI points.
    pub fn size_points(&self) -> [f32; 2] {
        let ppp = self.pixels_per_point();
        [self.width as f32 / ppp, self.height as f32 / ppp]
    }
}

/// List all connected displays in OS order.
pub fn list_screens() -> Result<Vec<ScreenInfo>, PointerError> {
    let monitors = Monitor::all().map_err(|e| PointerError::Displays(e.to_string()))?;
    let screens = monitors
        .iter()
        .enumerate()
        .map(|(index, monitor)| ScreenInfo {
            index,
            name: monitor.name().unwrap_or_default(),
            x: monitor.x().unwrap_or(0),
            y: monitor.y().unwrap_or(0),
            width: monitor.width().unwrap_or(1920),
            height: monitor.height().unwrap_or(1080),
            scale_factor: monitor.scale_factor().unwrap_or(1.0),
            is_primary: monitor.is_primary().unwrap_or(false),
        })
        .collect();
    Ok(screens)
}
