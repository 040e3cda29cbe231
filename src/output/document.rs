//! The HTML document shell around the rendered tree

use std::io::{self, Write};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background-color: #f4f4f4; }
ul { list-style-type: none; margin: 0; padding: 0; }
li { margin: 5px 0; padding-left: 20px; }
details summary { cursor: pointer; font-weight: bold; }
details[open] summary { color: #1e90ff; }
details ul { margin-left: 20px; padding-left: 20px; border-left: 2px dashed #ccc; }
li strong { color: #555; font-weight: normal; }
";

/// Write everything up to and including the opening top-level `<ul>`.
///
/// `title` goes into both `<title>` and `<h1>` unescaped.
pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head><title>Directory Structure of {}</title>", title)?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<style>")?;
    out.write_all(STYLE.as_bytes())?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>Directory Structure of {}</h1>", title)?;
    writeln!(out, "<ul>")?;
    Ok(())
}

/// Close the top-level list and the document.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</ul>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}
