//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Build a tree `depth` levels deep with `files_per_dir` files and
    /// `dirs_per_dir` subdirectories in each directory.
    pub fn generated(depth: usize, dirs_per_dir: usize, files_per_dir: usize) -> Self {
        let tree = Self::new();
        let mut level = vec![tree.path().to_path_buf()];
        for d in 0..=depth {
            let mut next = Vec::new();
            for dir in &level {
                for f in 0..files_per_dir {
                    let content = "x".repeat((f + 1) * 100);
                    fs::write(dir.join(format!("file_{}.txt", f)), content)
                        .expect("Failed to write file");
                }
                if d < depth {
                    for s in 0..dirs_per_dir {
                        let sub = dir.join(format!("dir_{}", s));
                        fs::create_dir(&sub).expect("Failed to create dir");
                        next.push(sub);
                    }
                }
            }
            level = next;
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
