//! Endpoint listing command implementation

use anyhow::Result;
use colored::Colorize;
use mdscope_core::{ApiEndpoint, DocumentIndex, api_endpoints_in};
use serde::Serialize;

use crate::output::{OutputFormat, print_records};

#[derive(Debug, Serialize)]
struct EndpointRecord<'a> {
    path: &'a str,
    #[serde(flatten)]
    endpoint: ApiEndpoint,
}

fn matches_filter(endpoint: &ApiEndpoint, needle: &str) -> bool {
    [&endpoint.name, &endpoint.method, &endpoint.endpoint]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Execute the endpoints command
pub fn execute(index: &DocumentIndex, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let needle = filter.map(|f| f.trim().to_lowercase()).unwrap_or_default();

    let records: Vec<EndpointRecord<'_>> = index
        .documents()
        .flat_map(|doc| {
            api_endpoints_in(&doc.content)
                .into_iter()
                .map(move |endpoint| EndpointRecord {
                    path: &doc.relative_path,
                    endpoint,
                })
        })
        .filter(|record| matches_filter(&record.endpoint, &needle))
        .collect();

    if format.is_machine_readable() {
        return print_records(format, &records);
    }

    if records.is_empty() {
        println!("No API endpoints found");
        return Ok(());
    }

    for record in &records {
        println!(
            "{:<7}{}  {}  {}",
            record.endpoint.method.green(),
            record.endpoint.endpoint.cyan(),
            record.endpoint.name,
            format!("({})", record.path).dimmed()
        );
    }
    Ok(())
}
