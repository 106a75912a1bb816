//! Site configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   ├── content    # [content]
//! │   ├── feed       # [feed]
//! │   ├── site       # [site]
//! │   ├── social     # [social]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config discovery, `extends` merging
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is built once, never mutated afterwards, and
//! passed by reference. Loading performs no validation beyond what the
//! types themselves enforce; [`SiteConfig::validate`] is an explicit,
//! separate step used by `blogconf check`.
//!
//! # Layering
//!
//! A file may name a base file with a root `extends` key. The base is
//! loaded first and the extending file is deep-merged over it:
//!
//! ```toml
//! # publish.toml
//! extends = "blog.toml"
//!
//! [site]
//! url = "https://whenofpython.com"
//!
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! ```

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, merge_tables, resolve_extends};

pub use section::{
    AssetsConfig, ContentConfig, FeedConfig, IconEntry, PathMetadata, SiteInfoConfig,
    SocialConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root key naming the base file of a layered config.
pub const EXTENDS_KEY: &str = "extends";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity (author, title, url, timezone, language)
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Content root and listing settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Syndication feeds
    #[serde(default)]
    pub feed: FeedConfig,

    /// Social link icons
    #[serde(default)]
    pub social: SocialConfig,

    /// Theme selection and overrides
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Static paths and per-file output paths
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl SiteConfig {
    /// Load configuration for the CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory. Nothing from the environment or
    /// the command line is merged into the settings.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            return Err(ConfigError::NotFound(cli.config.clone()).into());
        };

        Self::from_path(&config_path)
    }

    /// Record where the config came from; the root is its parent directory.
    fn set_config_path(&mut self, path: &Path) {
        self.config_path = crate::utils::normalize_path(path);
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);
    }

    /// Parse configuration from TOML string.
    ///
    /// `extends` needs a file to resolve against and is rejected here.
    pub fn from_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        if table.contains_key(EXTENDS_KEY) {
            return Err(ConfigError::Extends(format!(
                "`{EXTENDS_KEY}` is only supported when loading from a file"
            ))
            .into());
        }
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, resolving `extends`.
    ///
    /// Unknown keys are logged as warnings and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut layers = Vec::new();
        let table = Self::read_layered(path, &mut Vec::new(), &mut layers)?;

        let (mut config, ignored) = Self::deserialize_with_ignored(toml::Value::Table(table))
            .map_err(|err| Self::blame_layer(layers, path, err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.set_config_path(path);
        Ok(config)
    }

    /// Read a config file and every file it `extends`, merged into one table.
    ///
    /// `chain` holds the files currently being read, to detect cycles.
    /// Each file's own table is appended to `layers`, base first.
    fn read_layered(
        path: &Path,
        chain: &mut Vec<PathBuf>,
        layers: &mut Vec<(PathBuf, toml::Table)>,
    ) -> Result<toml::Table, ConfigError> {
        let canonical = crate::utils::normalize_path(path);
        if chain.contains(&canonical) {
            chain.push(canonical);
            return Err(ConfigError::ExtendsCycle(chain.clone()));
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut table: toml::Table =
            toml::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        let Some(base) = table.remove(EXTENDS_KEY) else {
            layers.push((path.to_path_buf(), table.clone()));
            return Ok(table);
        };
        let base = base.as_str().ok_or_else(|| {
            ConfigError::Extends(format!(
                "`{EXTENDS_KEY}` in '{}' must be a path string",
                path.display()
            ))
        })?;
        let base_path = resolve_extends(path, base);
        debug!("config"; "{} extends {}", path.display(), base_path.display());

        chain.push(canonical);
        let mut merged = Self::read_layered(&base_path, chain, layers)?;
        chain.pop();

        layers.push((path.to_path_buf(), table.clone()));
        merge_tables(&mut merged, table);
        Ok(merged)
    }

    /// Point a parse error of the merged table at the file holding the bad value.
    ///
    /// The first layer (base first) that fails on its own is blamed,
    /// falling back to the loaded file.
    fn blame_layer(
        layers: Vec<(PathBuf, toml::Table)>,
        loaded: &Path,
        err: toml::de::Error,
    ) -> ConfigError {
        for (file, table) in layers {
            if let Err(own) = Self::deserialize(toml::Value::Table(table)) {
                return ConfigError::Toml(file, own);
            }
        }
        ConfigError::Toml(loaded.to_path_buf(), err)
    }

    /// Deserialize, collecting any unknown fields.
    fn deserialize_with_ignored<'de, D>(deserializer: D) -> Result<(Self, Vec<String>), D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut ignored = Vec::new();
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse TOML content, collecting any unknown fields.
    #[cfg(test)]
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let (config, ignored) = Self::deserialize_with_ignored(toml::Deserializer::new(content))?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute content directory (`content.path` under the root).
    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.content.path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check the configuration against the files on disk.
    ///
    /// Collects every problem instead of stopping at the first one.
    /// Never called while loading.
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let root = self.get_root();
        let content_dir = self.content_dir();

        if !content_dir.is_dir() {
            diag.error(
                ContentConfig::FIELDS.path,
                format!(
                    "content directory '{}' not found",
                    self.content.path.display()
                ),
            );
        }

        self.site.validate(&content_dir, &mut diag);
        self.social.validate(&mut diag);
        self.theme.validate(root, &content_dir, &mut diag);
        self.assets.validate(&content_dir, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content verbatim.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
