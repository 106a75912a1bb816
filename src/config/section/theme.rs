//! `[theme]` section configuration.
//!
//! Selects the visual theme and what replaces or extends its defaults.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! path = "themes/pelican-alchemy/alchemy"    # Theme directory (relative to site root)
//! css_overrides = ["css/custom.css"]         # Applied after theme CSS (relative to content)
//! template_overrides = ["template-overrides/"]
//! bootstrap_css = "css/darkly.bootstrap.css"
//! pygments_style = "native"
//! rfg_favicons = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Theme directory (relative to site root).
    #[config(default = "theme", inline_doc = "Theme directory.")]
    pub path: PathBuf,

    /// Stylesheets applied after the theme defaults, in order
    /// (relative to the content directory).
    pub css_overrides: Vec<PathBuf>,

    /// Template directories searched before the theme's own templates
    /// (relative to site root).
    pub template_overrides: Vec<PathBuf>,

    /// Replacement Bootstrap stylesheet (relative to the content directory).
    pub bootstrap_css: Option<PathBuf>,

    /// Code highlighting style name.
    pub pygments_style: Option<String>,

    /// Emit the favicon markup produced by RealFaviconGenerator.
    #[config(inline_doc = "Emit generated favicon markup.")]
    pub rfg_favicons: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: "theme".into(),
            css_overrides: Vec::new(),
            template_overrides: Vec::new(),
            bootstrap_css: None,
            pygments_style: None,
            rfg_favicons: false,
        }
    }
}

impl ThemeConfig {
    /// Check that every referenced theme path exists.
    ///
    /// `root` anchors the theme and template directories, `content_dir`
    /// anchors stylesheets.
    pub fn validate(&self, root: &Path, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        if !root.join(&self.path).is_dir() {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("theme directory '{}' not found", self.path.display()),
                "clone the theme into the site, or fix the path",
            );
        }

        for dir in &self.template_overrides {
            Self::require(root, dir, true, Self::FIELDS.template_overrides, diag);
        }

        for style in &self.css_overrides {
            Self::require(content_dir, style, false, Self::FIELDS.css_overrides, diag);
        }

        if let Some(css) = &self.bootstrap_css {
            Self::require(content_dir, css, false, Self::FIELDS.bootstrap_css, diag);
        }
    }

    fn require(base: &Path, path: &Path, dir: bool, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let full = base.join(path);
        let found = if dir { full.is_dir() } else { full.is_file() };
        if !found {
            let kind = if dir { "directory" } else { "file" };
            diag.error(field, format!("{kind} '{}' not found", path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.path, PathBuf::from("theme"));
        assert!(config.theme.css_overrides.is_empty());
        assert!(config.theme.template_overrides.is_empty());
        assert!(config.theme.bootstrap_css.is_none());
        assert!(config.theme.pygments_style.is_none());
        assert!(!config.theme.rfg_favicons);
    }

    #[test]
    fn test_css_overrides_keep_order() {
        let config =
            test_parse_config("[theme]\ncss_overrides = [\"css/custom.css\", \"css/print.css\"]");
        assert_eq!(
            config.theme.css_overrides,
            vec![PathBuf::from("css/custom.css"), PathBuf::from("css/print.css")]
        );
    }

    #[test]
    fn test_validate_missing_paths() {
        let root = tempfile::tempdir().unwrap();
        let config = test_parse_config(
            r#"[theme]
path = "themes/alchemy"
css_overrides = ["css/custom.css"]
template_overrides = ["template-overrides/"]
bootstrap_css = "css/darkly.bootstrap.css"
"#,
        );

        let mut diag = ConfigDiagnostics::new();
        let content = root.path().join("content");
        config.theme.validate(root.path(), &content, &mut diag);
        assert_eq!(diag.error_count(), 4);

        fs::create_dir_all(root.path().join("themes/alchemy")).unwrap();
        fs::create_dir_all(root.path().join("template-overrides")).unwrap();
        fs::create_dir_all(content.join("css")).unwrap();
        fs::write(content.join("css/custom.css"), "body {}").unwrap();
        fs::write(content.join("css/darkly.bootstrap.css"), "body {}").unwrap();

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(root.path(), &content, &mut diag);
        assert!(!diag.has_errors(), "{diag}");
    }

    #[test]
    fn test_theme_path_is_file_not_dir() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("theme"), "").unwrap();

        let mut diag = ConfigDiagnostics::new();
        ThemeConfig::default().validate(root.path(), root.path(), &mut diag);
        assert_eq!(diag.errors()[0].field, ThemeConfig::FIELDS.path);
    }
}
