//! User interface: the main settings window.

pub mod main_window;

pub use main_window::{MainWindow, MainWindowModel};
