//! dirtree - render a directory tree as a collapsible HTML page

pub mod app;
pub mod config;
pub mod error;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use app::{Report, Request, generate, run};
pub use config::{Config, DEFAULT_OUTPUT_FILE};
pub use error::{Error, Result};
pub use output::{HtmlFormatter, OutputConfig, write_footer, write_header};
pub use size::format_size;
pub use tree::{EntryKind, TreeOutput, TreeWalker, WalkSummary};
