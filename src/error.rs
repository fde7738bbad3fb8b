//! Central error types.
//!
//! One `thiserror` enum per concern, unified under [`PointerError`] for the
//! application layer.

use std::path::PathBuf;

use thiserror::Error;

/// Settings could not be written.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A bundled image could not be loaded.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("cannot read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Audio output or playback failed.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("cannot start playback: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("cannot decode sound: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("cannot read sound {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main error type for pointer operations.
#[derive(Error, Debug)]
pub enum PointerError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    /// No display is available to host the overlay.
    #[error("no display available")]
    NoDisplay,

    /// The global pointer cannot be read.
    #[error("cannot read the mouse pointer (no X display, or accessibility permission missing)")]
    PointerUnavailable,

    /// Display enumeration failed.
    #[error("cannot list displays: {0}")]
    Displays(String),

    /// The UI event loop could not start.
    #[error("UI error: {0}")]
    Ui(String),
}

pub type Result<T> = std::result::Result<T, PointerError>;
