//! Document lookup command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{Document, DocumentIndex};
use serde::Serialize;

use crate::output::{OutputFormat, print_not_found, print_record};

#[derive(Debug, Serialize)]
struct OutlineEntry<'a> {
    level: usize,
    title: &'a str,
    anchor: &'a str,
    line_start: usize,
    line_end: usize,
}

#[derive(Debug, Serialize)]
struct DocumentSummary<'a> {
    path: &'a str,
    absolute_path: String,
    file_name: &'a str,
    title: &'a str,
    lines: usize,
    keywords: Vec<&'a str>,
    sections: Vec<OutlineEntry<'a>>,
}

impl<'a> DocumentSummary<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            path: &doc.relative_path,
            absolute_path: doc.absolute_path.display().to_string(),
            file_name: &doc.file_name,
            title: &doc.title,
            lines: doc.content.split('\n').count(),
            keywords: doc.keywords.iter().map(String::as_str).collect(),
            sections: doc
                .sections
                .iter()
                .map(|s| OutlineEntry {
                    level: s.level,
                    title: &s.title,
                    anchor: &s.anchor,
                    line_start: s.line_start,
                    line_end: s.line_end,
                })
                .collect(),
        }
    }
}

/// Execute the get command
pub fn execute(index: &DocumentIndex, path: &str, format: OutputFormat) -> Result<()> {
    let Some(doc) = index.get_document(path) else {
        print_not_found(format, &format!("Document not found: {path}"));
        return Ok(());
    };

    let summary = DocumentSummary::new(doc);
    if format.is_machine_readable() {
        return print_record(format, &summary);
    }

    println!("{}", summary.title.bold());
    println!("{}  ({} lines)", summary.path.cyan(), summary.lines);
    if !summary.keywords.is_empty() {
        println!("{} {}", "keywords:".dimmed(), summary.keywords.join(", "));
    }
    println!();

    for entry in &summary.sections {
        let indent = "  ".repeat(entry.level.saturating_sub(1));
        println!(
            "{indent}{} {}",
            entry.title,
            format!("#{} [{}-{}]", entry.anchor, entry.line_start, entry.line_end).dimmed()
        );
    }
    Ok(())
}
