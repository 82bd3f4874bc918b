use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Title given to documents that contain no heading.
pub const UNTITLED: &str = "Untitled";

/// One indexed markdown file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// `/`-separated path relative to the base path; unique index key.
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub file_name: String,
    /// Text of the first heading, or [`UNTITLED`].
    pub title: String,
    pub content: String,
    pub sections: Vec<Section>,
    pub keywords: BTreeSet<String>,
}

/// Text run from one heading up to the next heading of any level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub level: usize,
    pub title: String,
    pub content: String,
    pub anchor: String,
    /// Zero-based line of the heading.
    pub line_start: usize,
    /// Zero-based last line covered; equals `line_start` when the section is empty.
    pub line_end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub code: String,
    /// Zero-based line of the opening fence.
    pub line_start: usize,
    /// Line before the closing fence, or the last line if the fence never closed.
    pub line_end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Trimmed content of the cell at `index`, if present.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|c| c.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: String,
    pub is_header: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
    pub title: Option<String>,
}

/// A row of an API endpoint table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub name: String,
    pub method: String,
    pub endpoint: String,
}

/// Outcome of a successful [`DocumentIndex::build_index`](crate::DocumentIndex::build_index).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStats {
    pub indexed: usize,
    /// Files that could not be read or decoded and were left out.
    pub failed: usize,
    /// Configured root directories that do not exist under the base path.
    pub missing_roots: Vec<String>,
    pub elapsed_ms: u64,
}
