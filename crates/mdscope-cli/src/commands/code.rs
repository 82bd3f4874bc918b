//! Code example command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{ApiExampleFilter, CodeBlock, DocumentIndex, extract_code_blocks};
use serde::Serialize;

use crate::output::{OutputFormat, print_records};

#[derive(Debug, Serialize)]
struct CodeRecord<'a> {
    path: &'a str,
    #[serde(flatten)]
    block: CodeBlock,
}

/// Options for the code command
#[derive(Debug)]
pub struct CodeOptions<'a> {
    pub query: &'a str,
    pub lang: Option<&'a str>,
    pub all: bool,
}

fn language_matches(block: &CodeBlock, lang: Option<&str>) -> bool {
    lang.is_none_or(|wanted| {
        block
            .language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(wanted))
    })
}

/// Execute the code command
pub fn execute(
    index: &DocumentIndex,
    filter: &ApiExampleFilter,
    options: &CodeOptions<'_>,
    format: OutputFormat,
) -> Result<()> {
    let records: Vec<CodeRecord<'_>> = index
        .search_documents(options.query)
        .into_iter()
        .flat_map(|doc| {
            extract_code_blocks(&doc.content)
                .into_iter()
                .map(move |block| CodeRecord {
                    path: &doc.relative_path,
                    block,
                })
        })
        .filter(|record| language_matches(&record.block, options.lang))
        .filter(|record| options.all || filter.matches(&record.block))
        .collect();

    if format.is_machine_readable() {
        return print_records(format, &records);
    }

    if records.is_empty() {
        println!("No code examples found for '{}'", options.query);
        return Ok(());
    }

    for record in &records {
        let language = record.block.language.as_deref().unwrap_or("text");
        println!(
            "{} {}",
            format!("{}:{}", record.path, record.block.line_start + 1).cyan(),
            format!("({language})").dimmed()
        );
        println!("{}", record.block.code);
        println!();
    }
    Ok(())
}
