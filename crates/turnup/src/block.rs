//! Block splitting and classification.
//!
//! A block is a maximal run of the document without a blank line, trimmed of
//! surrounding whitespace. Classification is declarative: each block type is
//! a line pattern every line must satisfy, checked independently with no
//! cross-line coupling, first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6} ").expect("heading pattern"));
pub(crate) static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*-] ").expect("unordered item pattern"));
pub(crate) static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]\. ").expect("ordered item pattern"));

/// Block-level classification of a Markdown unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty block strings.
///
/// Blocks are separated by blank lines (two consecutive newlines). Trimming
/// touches only surrounding whitespace, never a block's interior.
pub fn split_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a block by its line structure.
///
/// Ordered list markers are a single digit followed by `. ` on each line,
/// with no ascending-sequence validation.
pub fn classify_block(block: &str) -> BlockType {
    if block.starts_with('#') && block.lines().all(|line| HEADING_LINE_RE.is_match(line)) {
        return BlockType::Heading;
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }
    if block.lines().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if block.lines().all(|line| UNORDERED_ITEM_RE.is_match(line)) {
        return BlockType::UnorderedList;
    }
    if block.lines().all(|line| ORDERED_ITEM_RE.is_match(line)) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
