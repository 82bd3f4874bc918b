//! In-memory document index.
//!
//! [`DocumentIndex::build_index`] walks the configured root directories under
//! the base path, parses every markdown file, and swaps the finished store in
//! only once the walk succeeds. Queries against an index that was never built
//! simply see no documents.

use crate::logging::{Logger, TracingLogger};
use crate::parser::split_into_sections;
use crate::{
    BuildStats, Config, Document, Error, IndexConfig, Result, Section, UNTITLED, extract_keywords,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

const TITLE_WEIGHT: usize = 10;
const FILE_NAME_WEIGHT: usize = 5;
const CONTENT_WEIGHT: usize = 1;

/// A search result with its additive relevance score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: usize,
}

/// Documents keyed by relative path, kept in insertion order.
#[derive(Debug, Default)]
struct DocumentStore {
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl DocumentStore {
    fn insert(&mut self, document: Document) {
        if let Some(&pos) = self.positions.get(&document.relative_path) {
            self.documents[pos] = document;
        } else {
            self.positions
                .insert(document.relative_path.clone(), self.documents.len());
            self.documents.push(document);
        }
    }

    fn get(&self, path: &str) -> Option<&Document> {
        self.positions.get(path).map(|&pos| &self.documents[pos])
    }
}

/// Searchable index over a markdown documentation tree.
pub struct DocumentIndex {
    base_path: PathBuf,
    settings: IndexConfig,
    logger: Arc<dyn Logger>,
    store: DocumentStore,
    last_build: Option<BuildStats>,
}

impl DocumentIndex {
    /// Create an empty index rooted at `config.paths.base`.
    pub fn new(config: &Config) -> Self {
        Self {
            base_path: config.paths.base.clone(),
            settings: config.index.clone(),
            logger: Arc::new(TracingLogger),
            store: DocumentStore::default(),
            last_build: None,
        }
    }

    /// Route build diagnostics to `logger` instead of `tracing`.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Statistics of the last successful build, if any.
    pub const fn last_build(&self) -> Option<&BuildStats> {
        self.last_build.as_ref()
    }

    /// Rebuild the index from scratch.
    ///
    /// Each configured root that exists under the base path is walked
    /// recursively; directories named in `skip_dirs` are pruned and every file
    /// ending in the configured extension is indexed under its `/`-separated
    /// path relative to the base. The root-level readme, when present, is
    /// indexed last under its file name.
    ///
    /// A file that cannot be read or decoded is logged and left out. An
    /// unusable base path or a failed directory walk aborts the build and
    /// leaves the previous contents untouched. A single subdirectory that
    /// cannot be listed, anywhere under a root, is enough to fail the walk.
    pub fn build_index(&mut self) -> Result<BuildStats> {
        let started = Instant::now();
        self.ensure_base_dir()?;

        let mut store = DocumentStore::default();
        let mut stats = BuildStats::default();

        for root in &self.settings.roots {
            let root_path = self.base_path.join(root);
            if !root_path.is_dir() {
                self.logger
                    .debug(&format!("Skipping missing root {}", root_path.display()));
                stats.missing_roots.push(root.clone());
                continue;
            }
            self.walk_root(&root_path, &mut store, &mut stats)?;
        }

        let readme = self.base_path.join(&self.settings.readme);
        if readme.is_file() {
            self.index_file(&readme, self.settings.readme.clone(), &mut store, &mut stats);
        }

        stats.indexed = store.documents.len();
        stats.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        self.logger.info(&format!(
            "Indexed {} documents from {} ({} failed) in {}ms",
            stats.indexed,
            self.base_path.display(),
            stats.failed,
            stats.elapsed_ms
        ));

        self.store = store;
        self.last_build = Some(stats.clone());
        Ok(stats)
    }

    fn ensure_base_dir(&self) -> Result<()> {
        let metadata = fs::metadata(&self.base_path).map_err(|e| {
            Error::Index(format!(
                "Base path {} is not accessible: {e}",
                self.base_path.display()
            ))
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(Error::Index(format!(
                "Base path {} is not a directory",
                self.base_path.display()
            )))
        }
    }

    fn walk_root(
        &self,
        root_path: &Path,
        store: &mut DocumentStore,
        stats: &mut BuildStats,
    ) -> Result<()> {
        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_pruned(e));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !entry
                .file_name()
                .to_string_lossy()
                .ends_with(self.settings.extension.as_str())
            {
                continue;
            }

            let Some(relative) = relative_key(&self.base_path, entry.path()) else {
                self.logger.warn(&format!(
                    "Skipping {}: outside base path",
                    entry.path().display()
                ));
                continue;
            };
            self.index_file(entry.path(), relative, store, stats);
        }

        Ok(())
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.settings.skip_dirs.iter().any(|d| d == name))
    }

    fn index_file(
        &self,
        path: &Path,
        relative: String,
        store: &mut DocumentStore,
        stats: &mut BuildStats,
    ) {
        match load_document(path, relative) {
            Ok(document) => {
                self.logger.debug(&format!(
                    "Indexed {} ({} sections, {} keywords)",
                    document.relative_path,
                    document.sections.len(),
                    document.keywords.len()
                ));
                store.insert(document);
            },
            Err(e) => {
                stats.failed += 1;
                self.logger
                    .error(&format!("Failed to index {}: {e}", path.display()));
            },
        }
    }

    /// Documents matching `query`, most relevant first.
    pub fn search_documents(&self, query: &str) -> Vec<&Document> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.document)
            .collect()
    }

    /// Score every document against `query` and return the non-zero ones.
    ///
    /// Matching is a case-insensitive substring test: +10 when the title
    /// contains the query, +5 for the file name, +1 per keyword containing
    /// it, and +1 for the content. Ties keep index order. The query is
    /// matched as given, surrounding whitespace included, but a query made
    /// only of whitespace matches nothing.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredDocument<'_>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut hits: Vec<ScoredDocument<'_>> = self
            .store
            .documents
            .iter()
            .filter_map(|document| {
                let score = relevance(document, &needle);
                (score > 0).then_some(ScoredDocument { document, score })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }

    /// Exact lookup by relative path.
    pub fn get_document(&self, path: &str) -> Option<&Document> {
        self.store.get(path)
    }

    /// First section of `path` whose title contains `title`, ignoring case.
    pub fn find_section(&self, path: &str, title: &str) -> Option<&Section> {
        let needle = title.to_lowercase();
        self.get_document(path)?
            .sections
            .iter()
            .find(|section| section.title.to_lowercase().contains(&needle))
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.store.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.documents.is_empty()
    }

    /// Indexed documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.store.documents.iter()
    }
}

fn load_document(path: &Path, relative_path: String) -> Result<Document> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| Error::Parse(format!("{} is not valid UTF-8: {e}", path.display())))?;

    let split = split_into_sections(&content);
    let title = split.title.unwrap_or_else(|| UNTITLED.to_string());
    let keywords = extract_keywords(&title, &content);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document {
        absolute_path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        relative_path,
        file_name,
        title,
        content,
        sections: split.sections,
        keywords,
    })
}

fn relevance(document: &Document, needle: &str) -> usize {
    let mut score = 0;
    if document.title.to_lowercase().contains(needle) {
        score += TITLE_WEIGHT;
    }
    if document.file_name.to_lowercase().contains(needle) {
        score += FILE_NAME_WEIGHT;
    }
    score += document
        .keywords
        .iter()
        .filter(|keyword| keyword.contains(needle))
        .count();
    if document.content.to_lowercase().contains(needle) {
        score += CONTENT_WEIGHT;
    }
    score
}

/// `/`-joined path of `path` relative to `base`.
fn relative_key(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn write(base: &Path, relative: &str, content: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn document(path: &str, title: &str, content: &str) -> Document {
        Document {
            relative_path: path.to_string(),
            absolute_path: PathBuf::from(path),
            file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
            title: title.to_string(),
            content: content.to_string(),
            sections: split_into_sections(content).sections,
            keywords: extract_keywords(title, content),
        }
    }

    fn index_with(documents: Vec<Document>) -> DocumentIndex {
        let mut index = DocumentIndex::new(&Config::default());
        for doc in documents {
            index.store.insert(doc);
        }
        index
    }

    #[test]
    fn test_relevance_weights() {
        let doc = Document {
            keywords: BTreeSet::from(["billing".to_string(), "billingkey".to_string()]),
            ..document("sdk/billing.md", "Billing", "billing body")
        };

        // title 10 + file name 5 + two keywords + content 1
        assert_eq!(relevance(&doc, "billing"), 18);
        assert_eq!(relevance(&doc, "body"), 1);
        assert_eq!(relevance(&doc, "missing"), 0);
    }

    #[test]
    fn test_search_orders_by_score() {
        let index = index_with(vec![
            document("guide/intro.md", "Intro", "# Intro\nmentions webhook once"),
            document("api/webhook.md", "Webhook Events", "# Webhook Events\nwebhook payloads"),
        ]);

        let hits = index.search_scored("WEBHOOK");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].document.relative_path, "api/webhook.md");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_search_ties_keep_insertion_order() {
        let index = index_with(vec![
            document("a.md", "Same", "same text"),
            document("b.md", "Same", "same text"),
        ]);

        let paths: Vec<_> = index
            .search_documents("text")
            .iter()
            .map(|d| d.relative_path.as_str())
            .collect();
        assert_eq!(paths, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let index = index_with(vec![document("a.md", "Anything", "# Anything\nbody")]);
        assert!(index.search_documents("").is_empty());
        assert!(index.search_documents("   ").is_empty());
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let index = index_with(vec![
            document("api/get.md", "Get", "# Get\nget ready"),
            document("api/target.md", "Target", "# Target\nbudget"),
        ]);

        let hits = index.search_scored("get ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].document.relative_path, "api/get.md");
        // content only: neither the title "Get" nor "get.md" contains the trailing space
        assert_eq!(hits[0].score, 1);

        assert_eq!(index.search_scored("get").len(), 2);
    }

    #[test]
    fn test_unbuilt_index_is_empty() {
        let index = DocumentIndex::new(&Config::default());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.search_documents("anything").is_empty());
        assert!(index.get_document("api/foo.md").is_none());
        assert!(index.find_section("api/foo.md", "intro").is_none());
        assert!(index.last_build().is_none());
    }

    #[test]
    fn test_find_section_case_insensitive() {
        let index = index_with(vec![document(
            "api/pay.md",
            "Pay",
            "# Pay\n## Request Body\nfields\n## Response Body\nresult",
        )]);

        let section = index.find_section("api/pay.md", "response").unwrap();
        assert_eq!(section.title, "Response Body");
        assert_eq!(
            index.find_section("api/pay.md", "BODY").map(|s| s.title.as_str()),
            Some("Request Body")
        );
        assert!(index.find_section("api/pay.md", "errors").is_none());
        assert!(index.find_section("api/other.md", "body").is_none());
    }

    #[test]
    fn test_store_replaces_duplicate_keys_in_place() {
        let mut store = DocumentStore::default();
        store.insert(document("a.md", "First", ""));
        store.insert(document("b.md", "B", ""));
        store.insert(document("a.md", "Second", ""));

        assert_eq!(store.documents.len(), 2);
        assert_eq!(store.documents[0].title, "Second");
        assert_eq!(store.get("a.md").map(|d| d.title.as_str()), Some("Second"));
    }

    #[test]
    fn test_relative_key_uses_forward_slashes() {
        let base = Path::new("/docs");
        let path = base.join("api").join("v1").join("pay.md");
        assert_eq!(relative_key(base, &path).as_deref(), Some("api/v1/pay.md"));
        assert_eq!(relative_key(base, Path::new("/elsewhere/x.md")), None);
    }

    #[test]
    fn test_build_swaps_in_new_store() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "api/one.md", "# One");

        let config = Config::default().with_base(temp.path());
        let mut index = DocumentIndex::new(&config);
        index.build_index().unwrap();
        assert_eq!(index.len(), 1);

        fs::remove_file(temp.path().join("api/one.md")).unwrap();
        write(temp.path(), "guide/two.md", "# Two");
        let stats = index.build_index().unwrap();

        assert_eq!(stats.indexed, 1);
        assert!(index.get_document("api/one.md").is_none());
        assert!(index.get_document("guide/two.md").is_some());
    }

    #[test]
    fn test_failed_build_keeps_previous_index() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("docs-root");
        fs::create_dir_all(&base).unwrap();
        write(&base, "api/keep.md", "# Keep");

        let config = Config::default().with_base(&base);
        let mut index = DocumentIndex::new(&config);
        index.build_index().unwrap();
        assert_eq!(index.len(), 1);

        fs::remove_dir_all(&base).unwrap();
        let result = index.build_index();

        assert!(matches!(result, Err(Error::Index(_))));
        assert_eq!(index.len(), 1);
        assert!(index.get_document("api/keep.md").is_some());
    }

    #[test]
    fn test_base_path_must_be_directory() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "file.md", "# Not a dir");

        let config = Config::default().with_base(temp.path().join("file.md"));
        let mut index = DocumentIndex::new(&config);

        let err = index.build_index().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
