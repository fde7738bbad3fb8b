//! Event system for decoupled inter-module communication.
//!
//! ```text
//! ┌─────────────┐                 ┌─────────────┐
//! │ Main Window │                 │   Overlay   │
//! │  controls   │                 │  (on close) │
//! └──────┬──────┘                 └──────┬──────┘
//!        │ publish()                     │ publish()
//!        ▼                               ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │       (owns settings, persistence and overlay)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
