//! Run-wide defaults

use std::path::{Path, PathBuf};

use crate::output::OutputConfig;

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "directory_structure.html";

/// Settings passed into a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_output: PathBuf,
    pub output: OutputConfig,
}

impl Config {
    /// The requested output path, or the default one.
    pub fn output_path(&self, requested: Option<&Path>) -> PathBuf {
        requested
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_output.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output: OutputConfig::default(),
        }
    }
}
