//! Block-to-node compilation.
//!
//! Each classified block becomes one HTML parent node; text inside the block
//! goes through the inline lexer and each resulting span becomes a leaf
//! child. A whole document compiles to a root `div` holding one child per
//! block in document order.

use regex::Regex;
use turnup_core::{HtmlNode, ParentNode, TextSpan};

use crate::block::{classify_block, split_blocks, BlockType, ORDERED_ITEM_RE, UNORDERED_ITEM_RE};
use crate::inline::lex_inline;
use crate::{Result, TurnupError};

/// Compile a whole document into a root `div` node with one child per block.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode> {
    let mut children = Vec::new();
    for block in split_blocks(document) {
        children.push(compile_block(&block, classify_block(&block))?);
    }
    Ok(ParentNode::new("div", children).into())
}

/// Compile one classified block into its HTML node.
pub fn compile_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Heading => compile_heading(block),
        BlockType::Paragraph => compile_paragraph(block),
        BlockType::Code => compile_code(block),
        BlockType::Quote => compile_quote(block),
        BlockType::UnorderedList => compile_list(block, "ul", &UNORDERED_ITEM_RE, 2),
        BlockType::OrderedList => compile_list(block, "ol", &ORDERED_ITEM_RE, 3),
    }
}

/// Lex block text and convert every span into an HTML leaf.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(lex_inline(text)?.iter().map(TextSpan::to_html).collect())
}

fn compile_heading(block: &str) -> Result<HtmlNode> {
    let level = block.chars().take_while(|&c| c == '#').count();
    if block.len() <= level + 1 {
        return Err(TurnupError::InvalidHeading);
    }
    let children = text_to_children(&block[level + 1..])?;
    Ok(ParentNode::new(&format!("h{level}"), children).into())
}

fn compile_paragraph(block: &str) -> Result<HtmlNode> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(ParentNode::new("p", text_to_children(&text)?).into())
}

fn compile_code(block: &str) -> Result<HtmlNode> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(TurnupError::InvalidCodeBlock);
    }
    let inner = if block.len() >= 6 {
        &block[3..block.len() - 3]
    } else {
        ""
    };
    let children = text_to_children(inner.trim())?;
    Ok(ParentNode::new("code", children).into())
}

fn compile_quote(block: &str) -> Result<HtmlNode> {
    let mut stripped = Vec::new();
    for line in block.lines() {
        if !line.starts_with('>') {
            return Err(TurnupError::InvalidQuoteBlock);
        }
        // Drop the marker and the space after it.
        stripped.push(line.get(2..).unwrap_or(""));
    }
    let content = stripped.join(" ");
    Ok(ParentNode::new("blockquote", text_to_children(&content)?).into())
}

fn compile_list(block: &str, tag: &str, item_re: &Regex, prefix_len: usize) -> Result<HtmlNode> {
    let mut items: Vec<HtmlNode> = Vec::new();
    for line in block.lines() {
        if !item_re.is_match(line) {
            return Err(TurnupError::InvalidListBlock);
        }
        let children = text_to_children(&line[prefix_len..])?;
        items.push(ParentNode::new("li", children).into());
    }
    Ok(ParentNode::new(tag, items).into())
}
