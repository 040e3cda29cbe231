//! Error types for dirtree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// The input path does not exist or is not a directory.
    #[error("the path '{}' does not exist or is not a directory", path.display())]
    Path { path: PathBuf },

    /// The output file could not be created.
    #[error("could not create the output file '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be inspected or listed during the walk.
    #[error("cannot read '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing markup to the output failed.
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Every failure maps to 1; callers only distinguish success from failure.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage line should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
