//! Configuration management for mdscope.
//!
//! Configuration is stored in TOML. Every field has a default, so a partial
//! file (or no file at all) is valid.
//!
//! ## Resolution Order
//!
//! 1. **Built-in defaults**
//! 2. **Config file**: the file named by `MDSCOPE_CONFIG`, otherwise
//!    `global.toml` in the platform config directory
//! 3. **Environment**: `MDSCOPE_BASE_PATH` overrides `paths.base`
//!
//! Callers such as the CLI may override the base path once more on top.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [paths]
//! base = "/srv/docs"
//!
//! [index]
//! roots = ["api", "guide", "sdk", "reference"]
//! skip_dirs = ["image", "node_modules", "dist"]
//! readme = "README.md"
//! extension = ".md"
//!
//! [extract]
//! api_markers = ["/api/", "/v1/"]
//! ```

use crate::parser::DEFAULT_API_MARKERS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MDSCOPE_CONFIG";
/// Environment variable overriding `paths.base`.
pub const BASE_PATH_ENV: &str = "MDSCOPE_BASE_PATH";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system locations
    pub paths: PathsConfig,
    /// Directory walk settings
    pub index: IndexConfig,
    /// Extraction vocabulary
    pub extract: ExtractConfig,
}

/// File system paths configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the documentation tree; the walk and all relative paths start here.
    pub base: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
        }
    }
}

/// Directory walk settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Top-level directories under the base path that are walked. Missing ones are skipped.
    pub roots: Vec<String>,
    /// Directory names pruned anywhere below a root (exact match).
    pub skip_dirs: Vec<String>,
    /// File at the base path indexed after the walk, keyed by its own name.
    pub readme: String,
    /// File name suffix of indexed documents.
    pub extension: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            roots: ["api", "guide", "sdk", "reference"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            skip_dirs: ["image", "node_modules", "dist"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            readme: "README.md".to_string(),
            extension: ".md".to_string(),
        }
    }
}

/// Extraction vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Substrings that mark a code block as an API example, in addition to
    /// the fixed HTTP vocabulary.
    pub api_markers: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            api_markers: DEFAULT_API_MARKERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    ///
    /// A missing file is not an error. A file that exists but cannot be read
    /// or parsed is.
    pub fn load() -> Result<Self> {
        Self::resolve(None)
    }

    /// Load configuration from `explicit` when given, otherwise from the default location.
    ///
    /// An explicit path must exist. Environment overrides are applied in both cases.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Self::config_path()?;
                if path.exists() {
                    Self::load_from(&path)?
                } else {
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Write configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path of the config file consulted by [`Config::load`].
    ///
    /// `MDSCOPE_CONFIG` wins; otherwise the platform config directory is used:
    /// - Linux: `~/.config/mdscope/global.toml`
    /// - macOS: `~/Library/Application Support/dev.mdscope.mdscope/global.toml`
    /// - Windows: `%APPDATA%\mdscope\mdscope\config\global.toml`
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let project_dirs = directories::ProjectDirs::from("dev", "mdscope", "mdscope")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("global.toml"))
    }

    /// Replace the base path.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.paths.base = base.into();
        self
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(BASE_PATH_ENV) {
            let trimmed = base.trim();
            if !trimmed.is_empty() {
                tracing::debug!("{BASE_PATH_ENV} overrides base path with {trimmed}");
                self.paths.base = PathBuf::from(trimmed);
            }
        }
    }
}
