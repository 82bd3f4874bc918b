//! # CLI Structure and Argument Parsing
//!
//! `mdscope` indexes a local markdown documentation tree on every invocation
//! and answers one query against it.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Scored full-text search
//! mdscope --base ./docs search "billing key" --limit 5
//!
//! # Inspect one document
//! mdscope get api/payments.md
//! mdscope section api/payments.md "request body"
//! mdscope links api/payments.md
//!
//! # Structured extraction
//! mdscope endpoints confirm --format json
//! mdscope code payment --lang bash
//! mdscope sdk requestPayment
//! ```
//!
//! ## Output Formats
//!
//! Every command accepts `--format text|json|jsonl` (or `--json`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::{OutputArgs, OutputFormat};

/// Main CLI structure for the `mdscope` command
#[derive(Parser, Clone, Debug)]
#[command(name = "mdscope")]
#[command(version)]
#[command(about = "mdscope - Search and inspect local markdown documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root of the documentation tree (overrides config and MDSCOPE_BASE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Config file to load instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Search indexed documents by title, file name, keywords, and content
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a document's metadata and section outline
    Get {
        /// Path relative to the base directory, e.g. `api/payments.md`
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the first section whose title contains TITLE
    Section {
        path: String,

        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List API endpoints found in endpoint tables
    Endpoints {
        /// Only show endpoints whose name, method, or path contains this text
        filter: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show code examples from documents matching QUERY
    Code {
        query: String,

        /// Only blocks tagged with this language
        #[arg(long, value_name = "LANG")]
        lang: Option<String>,

        /// Include blocks that are not API request examples
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find SDK method sections by name
    Sdk {
        method: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the links in a document
    Links {
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show index size and build statistics
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Commands {
    /// Output format selected for this command.
    pub const fn format(&self) -> OutputFormat {
        match self {
            Self::Search { output, .. }
            | Self::Get { output, .. }
            | Self::Section { output, .. }
            | Self::Endpoints { output, .. }
            | Self::Code { output, .. }
            | Self::Sdk { output, .. }
            | Self::Links { output, .. }
            | Self::Stats { output } => output.resolve(),
        }
    }
}
