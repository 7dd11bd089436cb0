//! turnup-core - HTML node tree and inline text spans
//!
//! This crate provides the core data structures used by the turnup Markdown
//! compiler: the typed text spans produced by the inline lexer and the HTML
//! node tree those spans are compiled into.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──lex──▶ ┌───────────┐          ┌──────────────┐
//!                          │ TextSpans │ ──────▶  │ HtmlNode tree│ ──▶ HTML String
//!                          └───────────┘          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use turnup_core::{HtmlNode, LeafNode, ParentNode};
//!
//! let node: HtmlNode = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new(None, "This is ").into(),
//!         LeafNode::new(Some("b"), "bold").into(),
//!         LeafNode::new(None, " text.").into(),
//!     ],
//! )
//! .into();
//!
//! assert_eq!(node.render().unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod html;
mod text;

pub use html::{Attrs, HtmlNode, LeafNode, ParentNode};
pub use text::{TextKind, TextSpan};

/// Error type for node rendering
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    /// A leaf node was rendered without a text value.
    #[error("invalid HTML: no value")]
    NoValue,

    /// A parent node was rendered without a tag.
    #[error("invalid HTML: no tag")]
    NoTag,

    /// A parent node was rendered without a children collection.
    #[error("invalid HTML: no children")]
    NoChildren,
}

pub type Result<T> = std::result::Result<T, RenderError>;
