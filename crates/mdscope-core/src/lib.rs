//! # mdscope-core
//!
//! Core functionality for mdscope - an in-memory index over a tree of markdown
//! documentation.
//!
//! The crate walks a documentation directory, splits each markdown file into
//! sections, derives a keyword set per document, and answers ranked keyword
//! queries and section lookups. The structural parser is exposed directly so
//! callers can pull tables, code blocks, links, and API endpoint rows out of a
//! document's content on demand.
//!
//! ## Architecture
//!
//! - **Configuration**: base path, root directories, and extraction vocabulary
//! - **Parsing**: line-oriented scanners for headings, fences, pipe-tables, and links
//! - **Keywords**: title and content token extraction used for scoring
//! - **Index**: directory walk, per-file indexing, scored substring search
//! - **Logging**: an injected [`Logger`] capability, forwarded to `tracing` by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdscope_core::{Config, DocumentIndex};
//!
//! let config = Config::load()?;
//! let mut index = DocumentIndex::new(&config);
//! let stats = index.build_index()?;
//! println!("indexed {} documents", stats.indexed);
//!
//! for doc in index.search_documents("payment") {
//!     println!("{} - {}", doc.relative_path, doc.title);
//! }
//! # Ok::<(), mdscope_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Lookups never fail for
//! missing documents or sections; absence is reported as `None` or an empty
//! result set.

/// Configuration for the documentation root and extraction vocabulary
pub mod config;
/// Error types and result aliases
pub mod error;
/// Heading detection and anchor slugs
pub mod heading;
/// In-memory document index
pub mod index;
/// Keyword extraction for relevance scoring
pub mod keywords;
/// Injected logging capability
pub mod logging;
/// Line-oriented markdown structural parser
pub mod parser;
/// Core data types and structures
pub mod types;

// Re-export commonly used types
pub use config::{Config, ExtractConfig, IndexConfig, PathsConfig};
pub use error::{Error, Result};
pub use heading::anchor_for;
pub use index::{DocumentIndex, ScoredDocument};
pub use keywords::extract_keywords;
pub use logging::{Logger, TracingLogger};
pub use parser::{
    ApiExampleFilter, SectionSplit, api_endpoints_in, extract_api_endpoints, extract_code_blocks,
    extract_links, extract_tables, parse_table, split_into_sections,
};
pub use types::*;
