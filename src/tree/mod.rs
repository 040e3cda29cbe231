//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory depth-first and reports each node to a
//! `TreeOutput` sink as it goes. Nothing about the tree is kept in memory
//! beyond the pending worklist.

mod entry;
mod walker;

use std::io;

pub use entry::{EntryKind, display_name};
pub use walker::{TreeWalker, WalkSummary};

/// Callback for streaming output - receives nodes in document order.
///
/// Every `open_dir` is matched by exactly one `close_dir` at the same depth,
/// with that directory's children reported in between.
pub trait TreeOutput {
    /// A directory begins. `label` is the full path for the top-level node and
    /// the bare directory name otherwise.
    fn open_dir(&mut self, label: &str, depth: usize) -> io::Result<()>;

    /// A regular file with its size in bytes.
    fn file(&mut self, name: &str, size: u64, depth: usize) -> io::Result<()>;

    /// The directory most recently opened at `depth` ends.
    fn close_dir(&mut self, depth: usize) -> io::Result<()>;
}
