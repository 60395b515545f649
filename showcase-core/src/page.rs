//! Page splicing
//!
//! Writes rendered output into existing documents: the inner HTML of an
//! element located by id, or a placeholder token in a text template.
//! Both operations return a new string and never modify their input, so a
//! failed splice leaves the caller's document untouched.

use regex::{Captures, Regex};
use thiserror::Error;

/// Placeholder replaced by [`substitute_placeholder`] in index templates
pub const TEMPLATE_PLACEHOLDER: &str = "$$$HERE$$$";

/// Errors that can occur while splicing output into a document
#[derive(Debug, Error)]
pub enum PageError {
    /// No element carries the requested id
    #[error("no element with id \"{0}\" found in page")]
    ElementNotFound(String),

    /// The element was found but its closing tag was not
    #[error("element with id \"{0}\" is never closed")]
    UnclosedElement(String),

    /// The template has no placeholder to replace
    #[error("placeholder {0} not found in template")]
    PlaceholderNotFound(String),

    #[error("invalid element pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;

/// A start tag, end tag or comment; comments are matched whole so any
/// markup inside them is never mistaken for a tag.
const TOKEN_PATTERN: &str = r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^"'\s>]+))?)*)\s*(/?)>"#;

/// One attribute: name, then an optional double-quoted, single-quoted or
/// unquoted value.
const ATTRIBUTE_PATTERN: &str = r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^"'\s>]+)))?"#;

/// A start or end tag located in a page
struct Tag<'a> {
    name: &'a str,
    attributes: &'a str,
    closing: bool,
    self_closing: bool,
    start: usize,
    end: usize,
}

impl<'a> Tag<'a> {
    /// `None` for comments
    fn from_captures(caps: Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let name = caps.get(2)?;
        let flag = |i: usize| caps.get(i).is_some_and(|m| !m.as_str().is_empty());

        Some(Tag {
            name: name.as_str(),
            attributes: caps.get(3).map_or("", |m| m.as_str()),
            closing: flag(1),
            self_closing: flag(4),
            start: whole.start(),
            end: whole.end(),
        })
    }

    fn has_id(&self, attribute_pattern: &Regex, id: &str) -> bool {
        attribute_pattern.captures_iter(self.attributes).any(|attr| {
            attr[1].eq_ignore_ascii_case("id")
                && (2..=4)
                    .find_map(|i| attr.get(i))
                    .is_some_and(|value| value.as_str() == id)
        })
    }
}

/// Replace the children of the first element whose `id` is `element_id`
///
/// The element's own start and end tags are preserved. Nested elements of
/// the same tag name are balanced when looking for the end tag, and tags
/// inside comments are ignored.
pub fn replace_inner_html(page: &str, element_id: &str, inner_html: &str) -> Result<String> {
    let token_pattern = Regex::new(TOKEN_PATTERN)?;
    let attribute_pattern = Regex::new(ATTRIBUTE_PATTERN)?;
    let mut tags = token_pattern
        .captures_iter(page)
        .filter_map(Tag::from_captures);

    let open = tags
        .by_ref()
        .find(|tag| !tag.closing && tag.has_id(&attribute_pattern, element_id))
        .ok_or_else(|| PageError::ElementNotFound(element_id.to_string()))?;

    if open.self_closing {
        return Err(PageError::UnclosedElement(element_id.to_string()));
    }

    let mut depth = 1usize;
    let close = tags
        .filter(|tag| tag.name.eq_ignore_ascii_case(open.name))
        .find(|tag| {
            if tag.closing {
                depth -= 1;
            } else if !tag.self_closing {
                depth += 1;
            }
            depth == 0
        })
        .ok_or_else(|| PageError::UnclosedElement(element_id.to_string()))?;

    let mut out = String::with_capacity(page.len() - (close.start - open.end) + inner_html.len());
    out.push_str(&page[..open.end]);
    out.push_str(inner_html);
    out.push_str(&page[close.start..]);
    Ok(out)
}

/// Replace every occurrence of [`TEMPLATE_PLACEHOLDER`] in `template`
pub fn substitute_placeholder(template: &str, content: &str) -> Result<String> {
    if !template.contains(TEMPLATE_PLACEHOLDER) {
        return Err(PageError::PlaceholderNotFound(
            TEMPLATE_PLACEHOLDER.to_string(),
        ));
    }

    Ok(template.replace(TEMPLATE_PLACEHOLDER, content))
}
