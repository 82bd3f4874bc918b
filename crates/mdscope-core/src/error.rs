//! Error types and handling for mdscope-core operations.
//!
//! Two failure kinds matter to callers of the index:
//!
//! - **Per-file failures** (unreadable file, invalid UTF-8) are recovered inside
//!   [`DocumentIndex::build_index`](crate::DocumentIndex::build_index): the file
//!   is logged and left out, and the build carries on.
//! - **Whole-build failures** (unusable base path, directory walk error) are
//!   returned to the caller, and the previously built index stays in place.
//!
//! Lookups never produce an error for absent documents or sections. There is
//! no retry logic anywhere in the crate.
//!
//! ```rust
//! use mdscope_core::Error;
//!
//! let error = Error::Index("base path is not a directory".to_string());
//! assert_eq!(error.category(), "index");
//! assert!(error.to_string().contains("Index error"));
//! ```

use thiserror::Error;

/// The main error type for mdscope-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading markdown files and configuration files. The underlying
    /// `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be decoded or interpreted.
    ///
    /// Raised when a markdown file is not valid UTF-8.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Index build failed as a whole.
    ///
    /// ## Common Causes
    ///
    /// - The base path does not exist or is not a directory
    /// - A directory under a root could not be read during the walk
    #[error("Index error: {0}")]
    Index(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let location = err
            .path()
            .map_or_else(String::new, |p| format!(" at {}", p.display()));
        Self::Index(format!("Directory walk failed{location}: {err}"))
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field:
    ///
    /// ```rust
    /// use mdscope_core::Error;
    ///
    /// let error = Error::Parse("stream did not contain valid UTF-8".into());
    /// tracing::warn!(category = error.category(), "{error}");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Index(_) => "index",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
