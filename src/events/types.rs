//! Application events for inter-module communication.
//!
//! These events represent high-level application actions published by the
//! main window and the overlay, and handled by the dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::Volume;

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (main window controls, overlay teardown)
/// through the EventBus to the dispatcher, which owns settings and the
/// overlay session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Main Window Events ===
    /// A cursor graphic was chosen (index into `CURSORS`)
    SelectCursor(usize),

    /// Start the pointer, replacing any active overlay
    StartPointer,

    /// Stop the pointer
    StopPointer,

    /// Volume slider moved
    SetVolume(Volume),

    /// A different monitor was chosen
    SelectScreen(usize),

    // === Overlay Lifecycle Events ===
    /// The overlay session ended (stop, Escape, restart or exit)
    OverlayClosed,
}

impl AppEvent {
    /// Returns true if handling this event changes persisted settings.
    pub fn persists_settings(&self) -> bool {
        matches!(self, AppEvent::SetVolume(_) | AppEvent::SelectScreen(_))
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SelectCursor(_) => "Select cursor graphic",
            AppEvent::StartPointer => "Start pointer overlay",
            AppEvent::StopPointer => "Stop pointer overlay",
            AppEvent::SetVolume(_) => "Change volume",
            AppEvent::SelectScreen(_) => "Change monitor",
            AppEvent::OverlayClosed => "Overlay closed",
        }
    }
}
