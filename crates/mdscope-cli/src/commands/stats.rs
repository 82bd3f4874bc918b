//! Index statistics command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{BuildStats, DocumentIndex};
use serde::Serialize;

use crate::output::{OutputFormat, print_record};

#[derive(Debug, Serialize)]
struct IndexStats<'a> {
    base_path: String,
    documents: usize,
    sections: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_build: Option<&'a BuildStats>,
}

/// Execute the stats command
pub fn execute(index: &DocumentIndex, format: OutputFormat) -> Result<()> {
    let stats = IndexStats {
        base_path: index.base_path().display().to_string(),
        documents: index.len(),
        sections: index.documents().map(|d| d.sections.len()).sum(),
        last_build: index.last_build(),
    };

    if format.is_machine_readable() {
        return print_record(format, &stats);
    }

    println!("{}", "Index Statistics".bold());
    println!("  Base path:  {}", stats.base_path.cyan());
    println!("  Documents:  {}", stats.documents);
    println!("  Sections:   {}", stats.sections);

    match stats.last_build {
        Some(build) => {
            println!("  Failed:     {}", build.failed);
            if !build.missing_roots.is_empty() {
                println!("  Missing:    {}", build.missing_roots.join(", ").yellow());
            }
            println!("  Build time: {}ms", build.elapsed_ms);
        },
        None => println!("  {}", "Index was not built".yellow()),
    }
    Ok(())
}
