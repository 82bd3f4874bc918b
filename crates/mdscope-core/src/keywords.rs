use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A Hangul syllable run, or a Latin letter followed by letters and digits.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CONTENT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣]+|[A-Za-z][A-Za-z0-9]*").unwrap());

/// Number of content token matches inspected, counted from the start of the document.
pub const MAX_CONTENT_TOKENS: usize = 50;

const MIN_TITLE_TOKEN_CHARS: usize = 2;
const MIN_CONTENT_TOKEN_CHARS: usize = 3;

/// Build the lowercase keyword set for a document.
///
/// Title tokens are split on whitespace and kept when at least two characters
/// long. Content tokens come from the first [`MAX_CONTENT_TOKENS`] matches in
/// document order and are kept when at least three characters long. Hangul
/// and Latin runs are matched separately and never merge.
///
/// ```rust
/// use mdscope_core::extract_keywords;
///
/// let keywords = extract_keywords("Payment API", "결제API 연동 guide");
/// assert!(keywords.contains("payment"));
/// assert!(keywords.contains("api"));
/// assert!(keywords.contains("guide"));
/// assert!(!keywords.contains("결제api"));
/// ```
pub fn extract_keywords(title: &str, content: &str) -> BTreeSet<String> {
    let mut keywords: BTreeSet<String> = title
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TITLE_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect();

    keywords.extend(
        CONTENT_TOKEN_RE
            .find_iter(content)
            .take(MAX_CONTENT_TOKENS)
            .map(|m| m.as_str())
            .filter(|token| token.chars().count() >= MIN_CONTENT_TOKEN_CHARS)
            .map(str::to_lowercase),
    );

    keywords
}
