//! Classification of filesystem entries

use std::fs;
use std::io;
use std::path::Path;

/// What a path turned out to be when the walker inspected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { size: u64 },
    /// Symlinks, sockets, FIFOs, devices.
    Other,
}

impl EntryKind {
    /// Inspect `path`. Symlinks are only resolved when `follow_links` is set,
    /// which the walker does for the root alone.
    pub fn of(path: &Path, follow_links: bool) -> io::Result<Self> {
        let meta = if follow_links {
            fs::metadata(path)?
        } else {
            fs::symlink_metadata(path)?
        };
        let file_type = meta.file_type();

        Ok(if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File { size: meta.len() }
        } else {
            EntryKind::Other
        })
    }
}

/// Last path component, or the whole path when there is none (`/`, `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
