//! HTML rendering
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `html` - Streaming list formatter for the tree itself
//! - `document` - Head, style block and closing tags around the tree

mod config;
mod document;
mod html;

pub use config::OutputConfig;
pub use document::{write_footer, write_header};
pub use html::HtmlFormatter;
