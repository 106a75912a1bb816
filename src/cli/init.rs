//! `init` command: write a commented config file for a new blog.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::section::{
    AssetsConfig, ContentConfig, FeedConfig, SiteInfoConfig, SocialConfig, ThemeConfig,
};
use crate::log;

/// Directories created next to the config, relative to the site root.
const SITE_DIRS: &[&str] = &["content", "content/images", "theme"];

/// Generate config content with every section and its defaults.
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Blog configuration file (blogconf v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Base another file with: extends = \"blog.toml\"\n\n");

    for section in [
        SiteInfoConfig::template_with_header(),
        ContentConfig::template_with_header(),
        FeedConfig::template_with_header(),
        SocialConfig::template_with_header(),
        ThemeConfig::template_with_header(),
        AssetsConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out
}

/// Create a site directory with a default config.
///
/// `name` is the site directory (cwd when `None`). An existing config file
/// is never overwritten.
pub fn new_config(name: Option<&Path>, config_name: &Path) -> Result<()> {
    let root = name.unwrap_or_else(|| Path::new("."));
    let path = root.join(config_name);

    if path.exists() {
        bail!(
            "'{}' already exists, refusing to overwrite it",
            path.display()
        );
    }

    for dir in SITE_DIRS {
        let dir = root.join(dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_has_every_section() {
        let template = generate_config_template();
        for header in [
            "[site]", "[content]", "[feed]", "[social]", "[theme]", "[assets]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_loads_as_defaults() {
        let config = SiteConfig::from_str(&generate_config_template()).unwrap();
        let default = SiteConfig::default();

        assert_eq!(config.site, default.site);
        assert_eq!(config.content, default.content);
        assert_eq!(config.feed, default.feed);
        assert_eq!(config.theme.path, default.theme.path);
        assert_eq!(config.assets.static_paths, default.assets.static_paths);
    }

    #[test]
    fn test_new_config_in_named_dir() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("my-blog");
        new_config(Some(&site), Path::new("blog.toml")).unwrap();

        assert!(site.join("blog.toml").is_file());
        assert!(site.join("content/images").is_dir());

        let config = SiteConfig::from_path(&site.join("blog.toml")).unwrap();
        assert!(!config.validate().has_errors());
    }

    #[test]
    fn test_new_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(new_config(Some(temp.path()), Path::new("blog.toml")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    }
}
