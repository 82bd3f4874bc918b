use crate::Link;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex for inline links: [text](url) or [text](url "title")
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static INLINE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#).unwrap()
});

/// Regex for reference-style links: [text][ref]
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static REFERENCE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]+)\]").unwrap());

/// Regex for reference link definitions: [ref]: url
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static REFERENCE_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[([^\]]+)\]:\s*(\S+)").unwrap());

/// Extract links from markdown text.
///
/// Inline links come first in document order, followed by reference links.
/// A reference link whose label has no `[label]: url` definition in the same
/// text is dropped.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut links: Vec<Link> = INLINE_LINK_RE
        .captures_iter(text)
        .filter_map(|cap| {
            Some(Link {
                text: cap.get(1)?.as_str().to_string(),
                url: cap.get(2)?.as_str().to_string(),
                title: cap.get(3).map(|m| m.as_str().to_string()),
            })
        })
        .collect();

    let mut definitions: HashMap<&str, &str> = HashMap::new();
    for cap in REFERENCE_DEF_RE.captures_iter(text) {
        if let (Some(label), Some(url)) = (cap.get(1), cap.get(2)) {
            definitions.entry(label.as_str()).or_insert(url.as_str());
        }
    }

    for cap in REFERENCE_LINK_RE.captures_iter(text) {
        let (Some(label), Some(reference)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        if let Some(url) = definitions.get(reference.as_str()) {
            links.push(Link {
                text: label.as_str().to_string(),
                url: (*url).to_string(),
                title: None,
            });
        }
    }

    links
}
