//! Line-oriented markdown structural parser.
//!
//! Every function here is pure and re-parses its input on each call; nothing
//! is cached. Only the constructs these documentation trees rely on are
//! recognized: ATX headings, backtick fences, pipe-tables, and inline or
//! reference links.

mod code;
mod extract;
mod links;
mod sections;
mod tables;

pub use code::extract_code_blocks;
pub use extract::{ApiExampleFilter, DEFAULT_API_MARKERS, api_endpoints_in, extract_api_endpoints};
pub use links::extract_links;
pub use sections::{SectionSplit, split_into_sections};
pub use tables::{extract_tables, parse_table};
