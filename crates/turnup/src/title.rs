//! Page title extraction.

use crate::{Result, TurnupError};

/// Extract the page title from a Markdown document.
///
/// The first line starting with `# ` (single hash, space) yields its
/// remainder. This scan is independent of block splitting: a title line is
/// found even inside a multi-line block.
pub fn extract_title(document: &str) -> Result<String> {
    for line in document.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            return Ok(rest.to_string());
        }
    }
    Err(TurnupError::NoTitle)
}
