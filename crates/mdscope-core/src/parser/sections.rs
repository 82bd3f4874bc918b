use crate::Section;
use crate::heading::{anchor_for, parse_heading_line};

/// Result of splitting a document at its headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSplit {
    /// Text of the first heading encountered, whatever its level.
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

struct OpenSection {
    level: usize,
    title: String,
    line_start: usize,
    lines: Vec<String>,
}

impl OpenSection {
    fn finish(self) -> Section {
        let line_end = self.line_start + self.lines.len();
        Section {
            level: self.level,
            anchor: anchor_for(&self.title),
            title: self.title,
            content: self.lines.join("\n"),
            line_start: self.line_start,
            line_end,
        }
    }
}

/// Split markdown text into flat sections, one per heading.
///
/// A section's content runs until the next heading of *any* level, so nesting
/// is not represented. Lines before the first heading belong to no section.
pub fn split_into_sections(text: &str) -> SectionSplit {
    let mut title = None;
    let mut sections = Vec::new();
    let mut current: Option<OpenSection> = None;

    for (line_no, line) in text.split('\n').enumerate() {
        if let Some(heading) = parse_heading_line(line) {
            if let Some(open) = current.take() {
                sections.push(open.finish());
            }
            if title.is_none() {
                title = Some(heading.text.to_string());
            }
            current = Some(OpenSection {
                level: heading.level,
                title: heading.text.to_string(),
                line_start: line_no,
                lines: Vec::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.lines.push(line.to_string());
        }
    }

    if let Some(open) = current {
        sections.push(open.finish());
    }

    SectionSplit { title, sections }
}
