//! mdscope CLI - search and inspect local markdown documentation
//!
//! The index is rebuilt from the documentation tree on every run, then the
//! selected command queries it. A failed build is logged and the command runs
//! against an empty index.

use anyhow::{Context, Result};
use clap::Parser;
use mdscope_core::{ApiExampleFilter, Config, DocumentIndex};

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use commands::CodeOptions;
use utils::logging::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    let mut index = DocumentIndex::new(&config);
    if let Err(e) = index.build_index() {
        tracing::error!("Failed to build index: {e}");
    }

    execute_command(cli.command, &config, &index)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    Ok(match &cli.base {
        Some(base) => config.with_base(base),
        None => config,
    })
}

fn execute_command(command: Commands, config: &Config, index: &DocumentIndex) -> Result<()> {
    let format = command.format();

    match command {
        Commands::Search { query, limit, .. } => {
            commands::search(index, &query, limit, format)?;
        },

        Commands::Get { path, .. } => {
            commands::get_document(index, &path, format)?;
        },

        Commands::Section { path, title, .. } => {
            commands::show_section(index, &path, &title, format)?;
        },

        Commands::Endpoints { filter, .. } => {
            commands::list_endpoints(index, filter.as_deref(), format)?;
        },

        Commands::Code {
            query, lang, all, ..
        } => {
            let filter = ApiExampleFilter::new(&config.extract.api_markers);
            let options = CodeOptions {
                query: &query,
                lang: lang.as_deref(),
                all,
            };
            commands::show_code(index, &filter, &options, format)?;
        },

        Commands::Sdk { method, .. } => {
            commands::find_sdk_method(index, &method, format)?;
        },

        Commands::Links { path, .. } => {
            commands::list_links(index, &path, format)?;
        },

        Commands::Stats { .. } => {
            commands::show_stats(index, format)?;
        },
    }

    Ok(())
}
