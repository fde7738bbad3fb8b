//! Settings persistence.

pub mod settings_file;

pub use settings_file::SettingsStore;
