use crate::CodeBlock;
use regex::Regex;
use std::sync::LazyLock;

/// Opening fence: three backticks, an optional word token, optional trailing whitespace.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w+)?\s*$").unwrap());

const FENCE: &str = "```";

/// Extract fenced code blocks in document order.
///
/// Fences do not nest: inside a block only a line that trims to exactly
/// three backticks closes it, and anything else is content. A block left open
/// at end of input is kept when it has at least one content line.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<(Option<String>, usize)> = None;
    let mut lines: Vec<&str> = Vec::new();
    let mut last_line = 0;

    for (line_no, line) in text.split('\n').enumerate() {
        last_line = line_no;
        match open.take() {
            None => {
                if let Some(caps) = FENCE_OPEN_RE.captures(line) {
                    let language = caps.get(1).map(|m| m.as_str().to_string());
                    open = Some((language, line_no));
                    lines.clear();
                }
            },
            Some((language, line_start)) => {
                if line.trim() == FENCE {
                    blocks.push(CodeBlock {
                        language,
                        code: lines.join("\n"),
                        line_start,
                        line_end: line_no - 1,
                    });
                } else {
                    lines.push(line);
                    open = Some((language, line_start));
                }
            },
        }
    }

    if let Some((language, line_start)) = open {
        if !lines.is_empty() {
            blocks.push(CodeBlock {
                language,
                code: lines.join("\n"),
                line_start,
                line_end: last_line,
            });
        }
    }

    blocks
}
