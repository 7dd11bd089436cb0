//! Inline text spans.
//!
//! A [`TextSpan`] is an immutable run of text within a block, tagged with the
//! semantic kind the inline lexer assigned to it. Spans are produced by the
//! lexer and consumed exactly once when they are converted into HTML leaves.

use crate::html::{Attrs, HtmlNode, LeafNode};

/// Semantic kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Plain text
    Text,
    /// Bold text (`**`)
    Bold,
    /// Italic text (`*`)
    Italic,
    /// Inline code (`` ` ``)
    Code,
    /// Hyperlink with label and destination
    Link,
    /// Image with alt text and source
    Image,
}

/// A typed span of inline text.
///
/// `url` is present only for links and images; the constructors keep that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: TextKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a span of the given kind with no destination.
    pub fn new(kind: TextKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    /// Create a plain text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TextKind::Text, text)
    }

    /// Create a link span with label and destination.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Create an image span with alt text and source.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    /// Check whether this span is still plain text.
    ///
    /// The lexer's delimiter passes only ever split plain spans; anything
    /// already typed travels through untouched.
    pub fn is_text(&self) -> bool {
        self.kind == TextKind::Text
    }

    /// Convert this span into the HTML leaf that renders it.
    pub fn to_html(&self) -> HtmlNode {
        match self.kind {
            TextKind::Text => LeafNode::new(None, &self.text).into(),
            TextKind::Bold => LeafNode::new(Some("b"), &self.text).into(),
            TextKind::Italic => LeafNode::new(Some("i"), &self.text).into(),
            TextKind::Code => LeafNode::new(Some("code"), &self.text).into(),
            TextKind::Link => {
                let mut attrs = Attrs::new();
                attrs.insert("href".to_string(), self.url.clone().unwrap_or_default());
                LeafNode::with_attrs("a", &self.text, attrs).into()
            }
            TextKind::Image => {
                let mut attrs = Attrs::new();
                attrs.insert("src".to_string(), self.url.clone().unwrap_or_default());
                attrs.insert("alt".to_string(), self.text.clone());
                LeafNode::with_attrs("img", "", attrs).into()
            }
        }
    }
}
