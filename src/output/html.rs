//! HTML list formatting
//!
//! This module provides `HtmlFormatter` which writes the tree as nested
//! `<ul>` lists. Directories become `<details>` elements that can be
//! collapsed in the browser; files become plain `<li>` leaves with their size.
//!
//! Names are written verbatim. No HTML escaping is applied.

use std::io::{self, Write};

use crate::size::format_size;
use crate::tree::TreeOutput;

use super::config::OutputConfig;

/// HTML output formatter - streams list markup into any writer.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct HtmlFormatter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> HtmlFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Borrow the underlying writer, e.g. to write the document shell.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for HtmlFormatter<W> {
    fn open_dir(&mut self, label: &str, depth: usize) -> io::Result<()> {
        let indent = self.config.indent(depth);
        writeln!(self.out, "{}<li>", indent)?;
        writeln!(self.out, "{}  <details>", indent)?;
        writeln!(self.out, "{}    <summary>{}</summary>", indent, label)?;
        writeln!(self.out, "{}    <ul>", indent)?;
        Ok(())
    }

    fn file(&mut self, name: &str, size: u64, depth: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}<li>{} (<strong>{}</strong>)</li>",
            self.config.indent(depth),
            name,
            format_size(size)
        )
    }

    fn close_dir(&mut self, depth: usize) -> io::Result<()> {
        let indent = self.config.indent(depth);
        writeln!(self.out, "{}    </ul>", indent)?;
        writeln!(self.out, "{}  </details>", indent)?;
        writeln!(self.out, "{}</li>", indent)?;
        Ok(())
    }
}
