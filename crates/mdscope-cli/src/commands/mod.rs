//! Command implementations for the mdscope CLI.
//!
//! Each command receives the already-built index and prints its result in the
//! selected output format.

mod code;
mod endpoints;
mod get;
mod links;
mod sdk;
mod search;
mod section;
mod stats;

pub use code::{CodeOptions, execute as show_code};
pub use endpoints::execute as list_endpoints;
pub use get::execute as get_document;
pub use links::execute as list_links;
pub use sdk::execute as find_sdk_method;
pub use search::execute as search;
pub use section::execute as show_section;
pub use stats::execute as show_stats;
