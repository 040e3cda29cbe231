//! TreeWalker - depth-first traversal driving a `TreeOutput` sink

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::entry::{EntryKind, display_name};
use super::TreeOutput;

/// Counts gathered while walking. The root counts as a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Entries that were neither directories nor regular files.
    pub skipped: usize,
    /// Sum of all regular file sizes.
    pub bytes: u64,
}

/// Pending work on the explicit stack.
#[derive(Debug)]
enum Frame {
    Visit {
        path: PathBuf,
        depth: usize,
        is_top_level: bool,
    },
    Close {
        depth: usize,
    },
}

/// Walks a directory tree in filesystem enumeration order.
///
/// Uses a heap-allocated worklist instead of recursion, so deep trees do not
/// grow the call stack. Entries below the root are classified without
/// following symlinks, which keeps link cycles out of the walk.
#[derive(Debug, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` as the top-level node at depth 0.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        self.walk_from(root, 0, true, output)
    }

    /// Walk `root` starting at an arbitrary depth.
    ///
    /// A top-level directory is labelled with the full path, any other
    /// directory with its last component.
    pub fn walk_from<O: TreeOutput>(
        &self,
        root: &Path,
        depth: usize,
        is_top_level: bool,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut stack = vec![Frame::Visit {
            path: root.to_path_buf(),
            depth,
            is_top_level,
        }];

        while let Some(frame) = stack.pop() {
            let (path, depth, is_top_level) = match frame {
                Frame::Close { depth } => {
                    output.close_dir(depth)?;
                    continue;
                }
                Frame::Visit {
                    path,
                    depth,
                    is_top_level,
                } => (path, depth, is_top_level),
            };

            let kind = EntryKind::of(&path, is_top_level).map_err(|source| Error::Traversal {
                path: path.clone(),
                source,
            })?;

            match kind {
                EntryKind::Directory => {
                    let label = if is_top_level {
                        path.to_string_lossy().to_string()
                    } else {
                        display_name(&path)
                    };
                    output.open_dir(&label, depth)?;
                    summary.dirs += 1;

                    let children = read_children(&path)?;
                    debug!(dir = %path.display(), entries = children.len(), "descending");

                    stack.push(Frame::Close { depth });
                    // Reversed so the first enumerated entry is popped first
                    for child in children.into_iter().rev() {
                        stack.push(Frame::Visit {
                            path: child,
                            depth: depth + 1,
                            is_top_level: false,
                        });
                    }
                }
                EntryKind::File { size } => {
                    output.file(&display_name(&path), size, depth)?;
                    summary.files += 1;
                    summary.bytes += size;
                }
                EntryKind::Other => {
                    trace!(path = %path.display(), "skipping non-regular entry");
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// List a directory's entries in the order the OS returns them.
fn read_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let traversal = |source: std::io::Error| Error::Traversal {
        path: dir.to_path_buf(),
        source,
    };

    fs::read_dir(dir)
        .map_err(traversal)?
        .map(|entry| entry.map(|e| e.path()).map_err(traversal))
        .collect()
}
