//! HTML node tree.
//!
//! Two node shapes cover all generated markup: a [`LeafNode`] holds literal
//! text and no children, a [`ParentNode`] holds ordered children and no text
//! of its own. Both carry an ordered attribute map and render themselves to
//! an HTML string.
//!
//! Unset fields are distinct from empty ones: a parent whose children are
//! `None` fails to render, while `Some(vec![])` renders as an empty element.

use indexmap::IndexMap;

use crate::{RenderError, Result};

/// Attribute map, rendered in insertion order.
pub type Attrs = IndexMap<String, String>;

/// A node in the generated HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Literal text, optionally wrapped in a tag
    Leaf(LeafNode),
    /// A tag wrapping an ordered sequence of child nodes
    Parent(ParentNode),
}

impl HtmlNode {
    /// Render this node and its descendants to an HTML string.
    pub fn render(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }

    /// Get the tag name, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A leaf node: literal text, no children.
///
/// A leaf without a tag renders as bare text; this is how plain inline text
/// is emitted between styled siblings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafNode {
    /// Wrapping tag; `None` renders the value verbatim
    pub tag: Option<String>,
    /// Literal text; `None` is unset and fails to render, `""` renders as an
    /// empty element body (self-closing-style leaves like images)
    pub value: Option<String>,
    /// Attributes, rendered in insertion order
    pub attrs: Attrs,
}

impl LeafNode {
    /// Create a leaf node with no attributes.
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attrs: Attrs::new(),
        }
    }

    /// Create a tagged leaf node with attributes.
    pub fn with_attrs(tag: &str, value: &str, attrs: Attrs) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attrs,
        }
    }

    /// Render this leaf to an HTML string.
    pub fn render(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(RenderError::NoValue)?;
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{}{}>{}</{}>",
                tag,
                render_attrs(&self.attrs),
                value,
                tag
            )),
        }
    }
}

/// A parent node: a tag wrapping ordered children, no text of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentNode {
    /// Wrapping tag; required at render time
    pub tag: Option<String>,
    /// Child nodes; `None` is unset and fails to render, `Some(vec![])`
    /// renders as an empty element
    pub children: Option<Vec<HtmlNode>>,
    /// Attributes, rendered in insertion order
    pub attrs: Attrs,
}

impl ParentNode {
    /// Create a parent node with no attributes.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Attrs::new(),
        }
    }

    /// Render this parent and its children, in order, to an HTML string.
    pub fn render(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(RenderError::NoTag)?;
        let children = self.children.as_deref().ok_or(RenderError::NoChildren)?;
        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.render()?);
        }
        Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            render_attrs(&self.attrs),
            inner,
            tag
        ))
    }
}

/// Render attributes as ` key="value"` pairs in insertion order.
fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", key, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_attrs() {
        let mut attrs = Attrs::new();
        attrs.insert("class".to_string(), "greeting".to_string());
        attrs.insert("href".to_string(), "https://boot.dev".to_string());
        assert_eq!(
            render_attrs(&attrs),
            " class=\"greeting\" href=\"https://boot.dev\""
        );
    }

    #[test]
    fn test_render_attrs_empty() {
        assert_eq!(render_attrs(&Attrs::new()), "");
    }

    #[test]
    fn test_leaf_render() {
        let node = LeafNode::new(Some("p"), "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_render_no_tag() {
        let node = LeafNode::new(None, "Hello, world!");
        assert_eq!(node.render().unwrap(), "Hello, world!");
    }

    #[test]
    fn test_leaf_render_with_attrs() {
        let mut attrs = Attrs::new();
        attrs.insert("href".to_string(), "https://boot.dev".to_string());
        let node = LeafNode::with_attrs("a", "Click me!", attrs);
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://boot.dev\">Click me!</a>"
        );
    }

    #[test]
    fn test_leaf_render_no_value() {
        let node = LeafNode {
            tag: Some("p".to_string()),
            value: None,
            attrs: Attrs::new(),
        };
        assert_eq!(node.render(), Err(RenderError::NoValue));
    }

    #[test]
    fn test_parent_render_with_children() {
        let child: HtmlNode = LeafNode::new(Some("span"), "child").into();
        let parent = ParentNode::new("div", vec![child]);
        assert_eq!(parent.render().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_parent_render_with_grandchildren() {
        let grandchild: HtmlNode = LeafNode::new(Some("b"), "grandchild").into();
        let child: HtmlNode = ParentNode::new("span", vec![grandchild]).into();
        let parent = ParentNode::new("div", vec![child]);
        assert_eq!(
            parent.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_parent_render_many_children() {
        let parent = ParentNode::new(
            "p",
            vec![
                LeafNode::new(Some("b"), "Bold text").into(),
                LeafNode::new(None, "Normal text").into(),
                LeafNode::new(Some("i"), "italic text").into(),
                LeafNode::new(None, "Normal text").into(),
            ],
        );
        assert_eq!(
            parent.render().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_parent_render_no_tag() {
        let parent = ParentNode {
            tag: None,
            children: Some(Vec::new()),
            attrs: Attrs::new(),
        };
        assert_eq!(parent.render(), Err(RenderError::NoTag));
    }

    #[test]
    fn test_parent_render_no_children() {
        let parent = ParentNode {
            tag: Some("div".to_string()),
            children: None,
            attrs: Attrs::new(),
        };
        assert_eq!(parent.render(), Err(RenderError::NoChildren));
    }

    #[test]
    fn test_parent_render_empty_children() {
        // An explicitly empty sequence is not unset: it renders an empty element.
        let parent = ParentNode::new("ul", Vec::new());
        assert_eq!(parent.render().unwrap(), "<ul></ul>");
    }

    #[test]
    fn test_render_error_propagates_from_child() {
        let broken: HtmlNode = LeafNode {
            tag: None,
            value: None,
            attrs: Attrs::new(),
        }
        .into();
        let parent = ParentNode::new("div", vec![broken]);
        assert_eq!(parent.render(), Err(RenderError::NoValue));
    }
}
