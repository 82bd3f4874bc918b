//! Section lookup command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::DocumentIndex;

use crate::output::{OutputFormat, print_not_found, print_record};

/// Execute the section command
pub fn execute(
    index: &DocumentIndex,
    path: &str,
    title: &str,
    format: OutputFormat,
) -> Result<()> {
    let Some(section) = index.find_section(path, title) else {
        print_not_found(format, &format!("No section matching '{title}' in {path}"));
        return Ok(());
    };

    if format.is_machine_readable() {
        return print_record(format, section);
    }

    println!(
        "{} {}",
        "#".repeat(section.level).dimmed(),
        section.title.bold()
    );
    println!("{}", section.content.trim_end());
    Ok(())
}
