//! Event handlers.
//!
//! This module contains the event dispatcher that owns settings and the
//! overlay session and reacts to events from the event bus.

pub mod dispatcher;

pub use dispatcher::{BackendProvider, Dispatcher, NativeBackends, Session};
