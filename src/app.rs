//! Generation pipeline: validate, open, write header, walk, write footer

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{HtmlFormatter, write_footer, write_header};
use crate::tree::{TreeWalker, WalkSummary};

/// What the command line asked for.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub output: PathBuf,
    pub summary: WalkSummary,
}

/// Generate the HTML document for `request`.
///
/// Fails fast on the first problem. If the output file was already created
/// when a later step fails, it is left behind partially written.
pub fn run(request: &Request, config: &Config) -> Result<Report> {
    let root = validate_input(request.path.as_deref())?;
    let output = config.output_path(request.output.as_deref());

    let file = File::create(&output).map_err(|source| Error::Output {
        path: output.clone(),
        source,
    })?;
    debug!(output = %output.display(), "opened output");

    let summary = generate(root, BufWriter::new(file), config)?;
    debug!(
        dirs = summary.dirs,
        files = summary.files,
        skipped = summary.skipped,
        bytes = summary.bytes,
        "walk finished"
    );

    Ok(Report { output, summary })
}

/// Write a complete document for `root` into `out`.
///
/// `root` is expected to be a directory already; see `run` for validation.
pub fn generate<W: Write>(root: &Path, out: W, config: &Config) -> Result<WalkSummary> {
    let title = root.to_string_lossy();
    let mut formatter = HtmlFormatter::new(config.output.clone(), out);

    write_header(formatter.get_mut(), &title)?;
    let summary = TreeWalker::new().walk(root, &mut formatter)?;
    write_footer(formatter.get_mut())?;

    formatter.into_inner().flush()?;
    Ok(summary)
}

fn validate_input(path: Option<&Path>) -> Result<&Path> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(Error::Usage("missing directory argument".to_string())),
    };

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        _ => Err(Error::Path {
            path: path.to_path_buf(),
        }),
    }
}
