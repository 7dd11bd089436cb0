//! # turnup
//!
//! Compile Markdown documents into a renderable HTML node tree.
//!
//! ## Design
//!
//! The compiler is a fixed pipeline of pure functions: a document is split
//! into blank-line-separated blocks, each block is classified by its line
//! structure, and each classified block is compiled into an HTML node. Text
//! inside a block goes through the inline lexer, which splits it into typed
//! spans (bold, italic, code, links, images) that become HTML leaves.
//!
//! ```text
//! document ──split──▶ blocks ──classify──▶ (text, BlockType) ──compile──▶ HtmlNode
//! ```
//!
//! There is no shared state anywhere in the pipeline; every call is a pure
//! function from input text to an output tree or a typed error.
//!
//! ## Example
//!
//! ```rust
//! let html = turnup::markdown_to_html("# Title\n\nHello **world**.").unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Title</h1><p>Hello <b>world</b>.</p></div>"
//! );
//! ```

mod block;
mod compile;
mod inline;
mod title;

pub use block::{classify_block, split_blocks, BlockType};
pub use compile::{compile_block, markdown_to_html_node};
pub use inline::{extract_images, extract_links, lex_inline};
pub use title::extract_title;

pub use turnup_core::{Attrs, HtmlNode, LeafNode, ParentNode, RenderError, TextKind, TextSpan};

/// Error type for Markdown compilation
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TurnupError {
    /// An inline delimiter appeared an odd number of times in a text span.
    #[error("invalid markdown: `{0}` section not closed")]
    UnclosedDelimiter(String),

    /// An extracted image did not split its source text into two parts.
    #[error("invalid markdown: image section not closed")]
    UnclosedImage,

    /// An extracted link did not split its source text into two parts.
    #[error("invalid markdown: link section not closed")]
    UnclosedLink,

    /// A heading marker with no content after it.
    #[error("invalid heading block")]
    InvalidHeading,

    /// A code block without matching triple-backtick delimiters.
    #[error("invalid code block")]
    InvalidCodeBlock,

    /// A quote block containing a line without the `>` marker.
    #[error("invalid quote block")]
    InvalidQuoteBlock,

    /// A list block containing a line without the item marker.
    #[error("invalid list block")]
    InvalidListBlock,

    /// No line starting with `# ` to take a title from.
    #[error("no title found")]
    NoTitle,

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, TurnupError>;

/// Compile a Markdown document and render it to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String> {
    let node = markdown_to_html_node(document)?;
    Ok(node.render()?)
}
