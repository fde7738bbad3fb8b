//! The cursor overlay: session state machine, cursor bitmaps and the
//! transparent window that draws them.

pub mod controller;
pub mod cursor_image;
pub mod view;

pub use controller::{OverlayBackends, OverlayController, PollTimer, TickOutcome};
pub use cursor_image::{load_thumbnail, CursorImage};
pub use view::{OverlayView, ViewResponse};
