//! Link listing command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{DocumentIndex, extract_links};

use crate::output::{OutputFormat, print_not_found, print_records};

/// Execute the links command
pub fn execute(index: &DocumentIndex, path: &str, format: OutputFormat) -> Result<()> {
    let Some(doc) = index.get_document(path) else {
        print_not_found(format, &format!("Document not found: {path}"));
        return Ok(());
    };

    let links = extract_links(&doc.content);
    if format.is_machine_readable() {
        return print_records(format, &links);
    }

    if links.is_empty() {
        println!("No links in {path}");
        return Ok(());
    }

    for link in &links {
        match &link.title {
            Some(title) => println!(
                "{} -> {} {}",
                link.text.bold(),
                link.url.cyan(),
                format!("\"{title}\"").dimmed()
            ),
            None => println!("{} -> {}", link.text.bold(), link.url.cyan()),
        }
    }
    Ok(())
}
