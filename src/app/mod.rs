//! Application shell: startup wiring and the eframe app.

pub mod pointer_app;
pub mod startup;

pub use pointer_app::PointerApp;
pub use startup::run;
