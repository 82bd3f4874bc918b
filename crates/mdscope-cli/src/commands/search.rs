//! Search command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::DocumentIndex;
use serde::Serialize;

use crate::output::{OutputFormat, print_records};

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    path: &'a str,
    title: &'a str,
    score: usize,
}

/// Execute the search command
pub fn execute(
    index: &DocumentIndex,
    query: &str,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let hits: Vec<SearchHit<'_>> = index
        .search_scored(query)
        .into_iter()
        .take(limit)
        .map(|hit| SearchHit {
            path: &hit.document.relative_path,
            title: &hit.document.title,
            score: hit.score,
        })
        .collect();

    if format.is_machine_readable() {
        return print_records(format, &hits);
    }

    if hits.is_empty() {
        println!("No documents match '{query}'");
        return Ok(());
    }

    for hit in &hits {
        println!(
            "{:>4}  {}  {}",
            hit.score.to_string().dimmed(),
            hit.path.cyan(),
            hit.title.bold()
        );
    }
    Ok(())
}
