//! Output formatting shared by all commands.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted text.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
    /// JSON Lines format (one JSON object per line).
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// Format selection flattened into every command.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output format (text, json, jsonl)
    #[arg(short = 'f', long = "format", value_enum, env = "MDSCOPE_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl OutputArgs {
    /// Resolve the flags to a concrete format, defaulting to text.
    #[must_use]
    pub const fn resolve(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        match self.format {
            Some(format) => format,
            None => OutputFormat::Text,
        }
    }
}

/// Print `items` as a JSON array or as one JSON object per line.
///
/// Text output is left to the caller.
pub fn print_records<T: Serialize>(format: OutputFormat, items: &[T]) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Jsonl => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        },
        OutputFormat::Text => {},
    }
    Ok(())
}

/// Print a single value in a machine-readable format.
pub fn print_record<T: Serialize>(format: OutputFormat, item: &T) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        OutputFormat::Jsonl => println!("{}", serde_json::to_string(item)?),
        OutputFormat::Text => {},
    }
    Ok(())
}

/// Report an absent document or section.
///
/// Machine formats get `null` on stdout so consumers always receive valid JSON.
pub fn print_not_found(format: OutputFormat, message: &str) {
    if format.is_machine_readable() {
        println!("null");
    } else {
        println!("{message}");
    }
}
