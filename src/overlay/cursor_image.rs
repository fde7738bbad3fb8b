//! Cursor bitmaps prepared for display.
//!
//! Images are scaled and mirrored once, when loaded or swapped, never per
//! frame.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, RgbaImage};

use crate::error::AssetError;
use crate::model::constants::{CURSOR_SCALE, THUMBNAIL_SIZE};

/// The overlay cursor: 40% of native size, mirrored horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorImage {
    pixels: RgbaImage,
}

impl CursorImage {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        Ok(Self::from_native(open_image(path)?.to_rgba8()))
    }

    /// Prepare a native-size bitmap for the overlay.
    pub fn from_native(native: RgbaImage) -> Self {
        let (w, h) = native.dimensions();
        let scaled_w = ((w as f32 * CURSOR_SCALE) as u32).max(1);
        let scaled_h = ((h as f32 * CURSOR_SCALE) as u32).max(1);
        let scaled = imageops::resize(&native, scaled_w, scaled_h, FilterType::Lanczos3);
        Self {
            pixels: imageops::flip_horizontal(&scaled),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Main-window preview: fits within `THUMBNAIL_SIZE`, mirrored like the overlay.
pub fn load_thumbnail(path: &Path) -> Result<RgbaImage, AssetError> {
    let fitted = open_image(path)?.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    Ok(imageops::flip_horizontal(&fitted.to_rgba8()))
}

fn open_image(path: &Path) -> Result<DynamicImage, AssetError> {
    image::open(path).map_err(|e| match e {
        ImageError::IoError(source) => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => AssetError::Image {
            path: path.to_path_buf(),
            source,
        },
    })
}
