//! The fixed set of cursor graphics offered in the main window.

use std::path::{Path, PathBuf};

/// A named cursor image bundled in the assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorDescriptor {
    pub name: &'static str,
    pub file_name: &'static str,
}

impl CursorDescriptor {
    /// Full path of the image inside `assets_dir`.
    pub fn image_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.file_name)
    }
}

/// All selectable cursors. Selection is an index into this list.
pub const CURSORS: &[CursorDescriptor] = &[
    CursorDescriptor {
        name: "default",
        file_name: "default.png",
    },
    CursorDescriptor {
        name: "default_reverse",
        file_name: "default_reverse.png",
    },
];

/// Looks up a cursor by index, falling back to the first entry.
pub fn cursor_at(index: usize) -> &'static CursorDescriptor {
    CURSORS.get(index).unwrap_or(&CURSORS[0])
}
