//! Inline span lexer.
//!
//! Splits the flat text of a block into typed spans by running a fixed
//! sequence of passes: bold (`**`), italic (`*`), code (`` ` ``), then image
//! extraction, then link extraction. Each pass consumes only spans still
//! classified as plain text; spans typed by an earlier pass travel through
//! untouched. The order is load-bearing: `**` must be split before `*`, and
//! image syntax must be consumed before link syntax so `![...]` is never
//! misread as `!` followed by a link.
//!
//! Styles do not nest. A link inside a bold span stays literal characters.

use once_cell::sync::Lazy;
use regex::Regex;
use turnup_core::{TextKind, TextSpan};

use crate::{Result, TurnupError};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("image pattern"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("link pattern"));

/// Lex a flat text string into an ordered sequence of typed spans.
pub fn lex_inline(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::text(text)];
    let spans = split_delimiter(spans, "**", TextKind::Bold)?;
    let spans = split_delimiter(spans, "*", TextKind::Italic)?;
    let spans = split_delimiter(spans, "`", TextKind::Code)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// One delimiter pass: split every plain span on `delimiter`, typing the
/// odd-position sections as `kind`.
///
/// The delimiter must occur an even number of times in each span (an odd
/// section count); empty sections are dropped.
fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: TextKind) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }
        let sections: Vec<&str> = span.text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(TurnupError::UnclosedDelimiter(delimiter.to_string()));
        }
        for (i, section) in sections.iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::text(*section));
            } else {
                out.push(TextSpan::new(kind, *section));
            }
        }
    }
    Ok(out)
}

/// Extract `![alt](src)` image references as (alt, src) pairs.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract `[label](destination)` link references as (label, destination)
/// pairs, skipping image syntax.
///
/// The regex crate has no lookbehind, so the original `(?<!!)` guard is a
/// check on the byte preceding each match.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| {
            let start = caps.get(0).map_or(0, |m| m.start());
            !text[..start].ends_with('!')
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Split plain spans around their image references.
fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }
        let images = extract_images(&span.text);
        if images.is_empty() {
            out.push(span);
            continue;
        }
        let mut rest = span.text.as_str();
        for (alt, src) in &images {
            let needle = format!("![{alt}]({src})");
            let mut parts = rest.splitn(2, needle.as_str());
            let (Some(before), Some(after)) = (parts.next(), parts.next()) else {
                return Err(TurnupError::UnclosedImage);
            };
            if !before.is_empty() {
                out.push(TextSpan::text(before));
            }
            out.push(TextSpan::image(alt.as_str(), src.as_str()));
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::text(rest));
        }
    }
    Ok(out)
}

/// Split plain spans around their link references.
fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }
        let links = extract_links(&span.text);
        if links.is_empty() {
            out.push(span);
            continue;
        }
        let mut rest = span.text.as_str();
        for (label, destination) in &links {
            let needle = format!("[{label}]({destination})");
            let mut parts = rest.splitn(2, needle.as_str());
            let (Some(before), Some(after)) = (parts.next(), parts.next()) else {
                return Err(TurnupError::UnclosedLink);
            };
            if !before.is_empty() {
                out.push(TextSpan::text(before));
            }
            out.push(TextSpan::link(label.as_str(), destination.as_str()));
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::text(rest));
        }
    }
    Ok(out)
}
