use regex::Regex;
use std::sync::LazyLock;

/// ATX heading: one to six `#`, whitespace, then the heading text.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").unwrap());

/// A heading recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Number of leading `#` characters (1-6).
    pub level: usize,
    /// Heading text with surrounding whitespace removed.
    pub text: &'a str,
}

/// Recognize an ATX heading line.
///
/// Returns `None` for lines with seven or more `#`, no whitespace after the
/// marker run, or nothing but whitespace after it.
pub fn parse_heading_line(line: &str) -> Option<HeadingLine<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    Some(HeadingLine { level, text })
}

/// Compute the URL-fragment slug for a heading title.
///
/// - Lowercases the title
/// - Drops everything except word characters, whitespace, and `-`
/// - Collapses each whitespace run into a single `-`
/// - Trims leading and trailing `-`
///
/// ```rust
/// use mdscope_core::anchor_for;
///
/// assert_eq!(anchor_for("Getting Started!"), "getting-started");
/// assert_eq!(anchor_for("  결제 승인 API  "), "결제-승인-api");
/// ```
pub fn anchor_for(title: &str) -> String {
    let mut anchor = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_separator = true;
        } else if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            if pending_separator {
                anchor.push('-');
                pending_separator = false;
            }
            anchor.push(ch);
        }
    }

    anchor.trim_matches('-').to_string()
}
