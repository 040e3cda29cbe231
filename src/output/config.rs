//! Output configuration types

const DEFAULT_INDENT_WIDTH: usize = 20;

/// Configuration for HTML formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces of indentation per tree level. Cosmetic only.
    pub indent_width: usize,
}

impl OutputConfig {
    /// Leading whitespace for a node at `depth`.
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
