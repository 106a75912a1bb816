//! `[assets]` section configuration.
//!
//! Static files copied to the output unchanged, plus per-file output
//! overrides for files that must land somewhere else (favicons at the
//! output root, verification files, ...).
//!
//! All paths are relative to the content directory.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! static_paths = ["extras", "images", "css", "js"]
//!
//! [assets.extra_path_metadata]
//! "extras/favicon.ico" = { path = "favicon.ico" }
//! "extras/site.webmanifest" = { path = "site.webmanifest" }
//! ```

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Component, Path, PathBuf};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

// ============================================================================
// Output Path Tracker (Validation Helper)
// ============================================================================

/// Tracks destinations to detect two sources written to the same file.
struct OutputPathTracker<'a> {
    seen: FxHashMap<PathBuf, &'a str>,
}

impl<'a> OutputPathTracker<'a> {
    fn new() -> Self {
        Self {
            seen: FxHashMap::default(),
        }
    }

    /// Check for conflict and insert. Reports error if conflict found.
    fn check_and_insert(
        &mut self,
        dest: &Path,
        source: &'a str,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        let dest = lexical_path(dest);
        if let Some(prev) = self.seen.get(&dest) {
            diag.error(
                field,
                format!(
                    "output conflict: '{source}' and '{prev}' both output to '/{}'",
                    dest.display()
                ),
            );
        } else {
            self.seen.insert(dest, source);
        }
    }
}

// ============================================================================
// Main Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "assets")]
pub struct AssetsConfig {
    /// Directories copied to the output unchanged.
    pub static_paths: Vec<PathBuf>,

    /// Per-file output overrides, keyed by source path, in declared order.
    /// Each value needs a `path` (destination relative to the output root).
    pub extra_path_metadata: IndexMap<String, PathMetadata>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_paths: vec!["images".into()],
            extra_path_metadata: IndexMap::new(),
        }
    }
}

/// Destination metadata for one static file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMetadata {
    /// Output path relative to the output root.
    pub path: PathBuf,

    /// Any further metadata, passed through untouched.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl PathMetadata {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extra: toml::Table::new(),
        }
    }
}

impl AssetsConfig {
    /// Check if a source path falls inside any static path.
    ///
    /// `./` components are ignored on both sides.
    pub fn is_static(&self, source: &Path) -> bool {
        let source = lexical_path(source);
        self.static_paths.iter().any(|dir| {
            let dir = lexical_path(dir);
            !dir.as_os_str().is_empty() && source.starts_with(&dir)
        })
    }

    /// Destination for a source file, if it is remapped.
    pub fn destination_of(&self, source: &str) -> Option<&Path> {
        self.extra_path_metadata
            .get(source)
            .map(|meta| meta.path.as_path())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check static paths and path metadata against the content directory.
    pub fn validate(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        self.validate_static_paths(content_dir, diag);
        self.validate_path_metadata(content_dir, diag);
    }

    fn validate_static_paths(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.static_paths;
        let total = self.static_paths.len();
        let mut seen = FxHashSet::default();

        for (idx, dir) in self.static_paths.iter().enumerate() {
            let prefix = index_prefix(idx, total);

            if dir.as_os_str().is_empty() {
                diag.error(field, format!("{prefix}static path is empty"));
                continue;
            }
            if !seen.insert(lexical_path(dir)) {
                diag.warn(
                    field,
                    format!("{prefix}'{}' is listed more than once", dir.display()),
                );
                continue;
            }
            if !validate_path_safety(dir, &prefix, field, diag) {
                continue;
            }
            if !content_dir.join(dir).exists() {
                diag.error(
                    field,
                    format!("{prefix}'{}' not found in content", dir.display()),
                );
            }
        }
    }

    fn validate_path_metadata(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.extra_path_metadata;
        let mut tracker = OutputPathTracker::new();

        for (source, meta) in &self.extra_path_metadata {
            if source.is_empty() {
                diag.error(field, "source path is empty");
                continue;
            }

            let source_path = Path::new(source);
            let prefix = format!("'{source}': ");
            if !validate_path_safety(source_path, &prefix, field, diag) {
                continue;
            }

            if !content_dir.join(source_path).is_file() {
                diag.error(field, format!("{prefix}file not found in content"));
            } else if !self.is_static(source_path) {
                diag.warn_with_hint(
                    field,
                    format!("{prefix}not inside any static path, it will not be copied"),
                    format!("add its directory to {}", Self::FIELDS.static_paths),
                );
            }

            if meta.path.as_os_str().is_empty() {
                diag.error(field, format!("{prefix}destination `path` is empty"));
            } else if validate_path_safety(&meta.path, &prefix, field, diag) {
                tracker.check_and_insert(&meta.path, source, field, diag);
            }
        }
    }
}

/// Only show index if there are multiple entries.
fn index_prefix(idx: usize, total: usize) -> String {
    if total > 1 {
        format!("[{idx}] ")
    } else {
        String::new()
    }
}

/// Path with `.` components dropped, for comparing `./images` with `images`.
fn lexical_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|comp| !matches!(comp, Component::CurDir))
        .collect()
}

/// Reject `..` components and absolute paths. Returns true when safe.
fn validate_path_safety(
    path: &Path,
    prefix: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> bool {
    for comp in path.components() {
        let reason = match comp {
            Component::ParentDir => "parent directory '..' not allowed",
            Component::Prefix(_) | Component::RootDir => "absolute paths not allowed",
            _ => continue,
        };
        diag.error(field, format!("{prefix}path '{}': {reason}", path.display()));
        return false;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    /// Content dir with `extras/favicon.ico` and an `images/` directory.
    fn content_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("extras")).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("extras/favicon.ico"), b"ico").unwrap();
        fs::write(dir.path().join("extras/robots.txt"), b"").unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.assets.static_paths, vec![PathBuf::from("images")]);
        assert!(config.assets.extra_path_metadata.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"[assets]
static_paths = ["extras", "images", "css", "js"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"extras/browserconfig.xml" = { path = "browserconfig.xml", status = "hidden" }
"#,
        );
        assert_eq!(config.assets.static_paths.len(), 4);
        assert_eq!(config.assets.static_paths[3], PathBuf::from("js"));
        assert_eq!(
            config.assets.destination_of("extras/favicon.ico"),
            Some(Path::new("favicon.ico"))
        );

        let meta = &config.assets.extra_path_metadata["extras/browserconfig.xml"];
        assert_eq!(meta.path, PathBuf::from("browserconfig.xml"));
        assert_eq!(
            meta.extra.get("status"),
            Some(&toml::Value::String("hidden".into()))
        );
    }

    #[test]
    fn test_metadata_requires_path() {
        let result = crate::config::SiteConfig::from_str(
            "[assets.extra_path_metadata]\n\"extras/favicon.ico\" = { save_as = \"favicon.ico\" }",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_is_static() {
        let config = test_parse_config("[assets]\nstatic_paths = [\"extras\", \"images\"]");
        assert!(config.assets.is_static(Path::new("extras/favicon.ico")));
        assert!(!config.assets.is_static(Path::new("extrasx/favicon.ico")));
        assert!(!config.assets.is_static(Path::new("css/custom.css")));
    }

    #[test]
    fn test_validate_ok() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["extras", "images"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert!(!diag.has_errors(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_empty_entries() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["", "images"]

[assets.extra_path_metadata]
"" = { path = "favicon.ico" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.error_count(), 2);
        assert!(diag.errors()[0].message.contains("[0] static path is empty"));
        assert!(diag.errors()[1].message.contains("source path is empty"));
    }

    #[test]
    fn test_validate_unsafe_paths() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["../outside", "/etc"]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.error_count(), 2);
        assert!(diag.errors()[0].message.contains("'..' not allowed"));
        assert!(diag.errors()[1].message.contains("absolute paths not allowed"));
    }

    #[test]
    fn test_validate_missing_static_path() {
        let content = content_fixture();
        let config = test_parse_config("[assets]\nstatic_paths = [\"js\"]");
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.error_count(), 1);
        assert!(diag.errors()[0].message.contains("'js' not found"));
    }

    #[test]
    fn test_validate_duplicate_static_path_warns() {
        let content = content_fixture();
        let config = test_parse_config("[assets]\nstatic_paths = [\"images\", \"images\"]");
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_validate_source_outside_static_paths_warns() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["images"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings()[0].message.contains("not inside any static path"));
    }

    #[test]
    fn test_validate_output_conflict() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["extras"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"extras/robots.txt" = { path = "favicon.ico" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.error_count(), 1);
        assert!(diag.errors()[0].message.contains("output conflict"));
    }

    #[test]
    fn test_validate_missing_source_file() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["extras"]

[assets.extra_path_metadata]
"extras/mstile-150x150.png" = { path = "mstile-150x150.png" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.error_count(), 1);
        assert!(diag.errors()[0].message.contains("file not found"));
    }

    #[test]
    fn test_dot_prefixed_static_path_covers_source() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["./extras", "images"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"./extras/robots.txt" = { path = "robots.txt" }
"#,
        );
        assert!(config.assets.is_static(Path::new("extras/favicon.ico")));
        assert!(config.assets.is_static(Path::new("./extras/robots.txt")));

        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert!(!diag.has_errors(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_dot_prefixed_duplicates_detected() {
        let content = content_fixture();
        let config = test_parse_config(
            r#"[assets]
static_paths = ["images", "./images", "extras"]

[assets.extra_path_metadata]
"extras/favicon.ico" = { path = "favicon.ico" }
"extras/robots.txt" = { path = "./favicon.ico" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(content.path(), &mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("listed more than once"));
        assert_eq!(diag.error_count(), 1);
        assert!(diag.errors()[0].message.contains("output conflict"));
    }

    #[test]
    fn test_metadata_keeps_declared_order() {
        let config = test_parse_config(
            r#"[assets.extra_path_metadata]
"extras/z.ico" = { path = "z.ico", title = "z" }
"extras/a.png" = { path = "a.png" }
"extras/m.txt" = { path = "m.txt" }
"#,
        );
        let sources: Vec<_> = config.assets.extra_path_metadata.keys().collect();
        assert_eq!(sources, ["extras/z.ico", "extras/a.png", "extras/m.txt"]);
    }
}
