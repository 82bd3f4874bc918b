//! SDK method lookup command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{CodeBlock, DocumentIndex, extract_code_blocks};
use serde::Serialize;

use crate::output::{OutputFormat, print_records};

#[derive(Debug, Serialize)]
struct MethodSection<'a> {
    path: &'a str,
    section: &'a str,
    anchor: &'a str,
    line_start: usize,
    content: &'a str,
    code_blocks: Vec<CodeBlock>,
}

/// Execute the sdk command
///
/// Every section, in any document, whose title contains the method name is
/// reported together with the code blocks inside it.
pub fn execute(index: &DocumentIndex, method: &str, format: OutputFormat) -> Result<()> {
    let needle = method.trim().to_lowercase();
    let matches: Vec<MethodSection<'_>> = if needle.is_empty() {
        Vec::new()
    } else {
        index
            .documents()
            .flat_map(|doc| {
                doc.sections
                    .iter()
                    .filter(|s| s.title.to_lowercase().contains(&needle))
                    .map(move |s| MethodSection {
                        path: &doc.relative_path,
                        section: &s.title,
                        anchor: &s.anchor,
                        line_start: s.line_start,
                        content: &s.content,
                        code_blocks: extract_code_blocks(&s.content),
                    })
            })
            .collect()
    };

    if format.is_machine_readable() {
        return print_records(format, &matches);
    }

    if matches.is_empty() {
        println!("No SDK method matching '{method}'");
        return Ok(());
    }

    for entry in &matches {
        println!(
            "{}  {}",
            entry.section.bold(),
            format!("{}#{}", entry.path, entry.anchor).cyan()
        );
        for block in &entry.code_blocks {
            println!(
                "{}",
                format!("```{}", block.language.as_deref().unwrap_or_default()).dimmed()
            );
            println!("{}", block.code);
            println!("{}", "```".dimmed());
        }
        println!();
    }
    Ok(())
}
