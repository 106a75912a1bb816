//! Settings handed to the rendering engine.
//!
//! The engine reads a flat map of upper-case setting names. This module is
//! the only place that knows those names; everything else works with the
//! typed [`SiteConfig`].
//!
//! Values are copied verbatim. Paths are emitted exactly as written in
//! `blog.toml` (relative, unnormalized), and the site URL is not touched.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value as JsonValue, json};

use crate::config::SiteConfig;

/// Setting names, in the order they are emitted.
pub mod keys {
    pub const AUTHOR: &str = "AUTHOR";
    pub const SITENAME: &str = "SITENAME";
    pub const SITESUBTITLE: &str = "SITESUBTITLE";
    pub const SITEDESCRIPTION: &str = "SITEDESCRIPTION";
    pub const SITEIMAGE: &str = "SITEIMAGE";
    pub const SITEURL: &str = "SITEURL";
    pub const PATH: &str = "PATH";
    pub const TIMEZONE: &str = "TIMEZONE";
    pub const DEFAULT_LANG: &str = "DEFAULT_LANG";
    pub const FEED_ALL_ATOM: &str = "FEED_ALL_ATOM";
    pub const CATEGORY_FEED_ATOM: &str = "CATEGORY_FEED_ATOM";
    pub const TRANSLATION_FEED_ATOM: &str = "TRANSLATION_FEED_ATOM";
    pub const AUTHOR_FEED_ATOM: &str = "AUTHOR_FEED_ATOM";
    pub const AUTHOR_FEED_RSS: &str = "AUTHOR_FEED_RSS";
    pub const ICONS: &str = "ICONS";
    pub const DEFAULT_PAGINATION: &str = "DEFAULT_PAGINATION";
    pub const RELATIVE_URLS: &str = "RELATIVE_URLS";
    pub const THEME: &str = "THEME";
    pub const STATIC_PATHS: &str = "STATIC_PATHS";
    pub const ARTICLE_EXCLUDES: &str = "ARTICLE_EXCLUDES";
    pub const EXTRA_PATH_METADATA: &str = "EXTRA_PATH_METADATA";
    pub const RFG_FAVICONS: &str = "RFG_FAVICONS";
    pub const BOOTSTRAP_CSS: &str = "BOOTSTRAP_CSS";
    pub const THEME_CSS_OVERRIDES: &str = "THEME_CSS_OVERRIDES";
    pub const PYGMENTS_STYLE: &str = "PYGMENTS_STYLE";
    pub const THEME_TEMPLATES_OVERRIDES: &str = "THEME_TEMPLATES_OVERRIDES";
}

/// Engine-facing view of a [`SiteConfig`], keyed by setting name.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    settings: Map<String, JsonValue>,
}

impl EngineSettings {
    /// Build the settings map from a loaded config.
    ///
    /// Feed keys are always present (`null` when disabled). Optional theme
    /// settings are omitted when unset so the theme default applies.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let site = &config.site;
        let feed = &config.feed;
        let theme = &config.theme;
        let assets = &config.assets;

        let mut settings = Map::new();
        let mut set = |key: &str, value: JsonValue| {
            settings.insert(key.to_string(), value);
        };

        set(keys::AUTHOR, json!(site.author));
        set(keys::SITENAME, json!(site.name));
        set(keys::SITESUBTITLE, json!(site.subtitle));
        set(keys::SITEDESCRIPTION, json!(site.description));
        set(keys::SITEIMAGE, site.image.as_deref().map_or(JsonValue::Null, path_value));
        set(keys::SITEURL, json!(site.url));
        set(keys::PATH, path_value(&config.content.path));
        set(keys::TIMEZONE, json!(site.timezone));
        set(keys::DEFAULT_LANG, json!(site.language));

        set(keys::FEED_ALL_ATOM, json!(feed.all_atom));
        set(keys::CATEGORY_FEED_ATOM, json!(feed.category_atom));
        set(keys::TRANSLATION_FEED_ATOM, json!(feed.translation_atom));
        set(keys::AUTHOR_FEED_ATOM, json!(feed.author_atom));
        set(keys::AUTHOR_FEED_RSS, json!(feed.author_rss));

        let icons: Vec<JsonValue> = config
            .social
            .pairs()
            .map(|(class, url)| json!([class, url]))
            .collect();
        set(keys::ICONS, JsonValue::Array(icons));

        set(keys::DEFAULT_PAGINATION, json!(config.content.pagination.get()));
        set(keys::RELATIVE_URLS, json!(site.relative_urls));
        set(keys::THEME, path_value(&theme.path));
        set(keys::STATIC_PATHS, paths_value(&assets.static_paths));
        set(
            keys::ARTICLE_EXCLUDES,
            paths_value(&config.content.article_excludes),
        );
        set(
            keys::EXTRA_PATH_METADATA,
            serde_json::to_value(&assets.extra_path_metadata)?,
        );
        set(keys::RFG_FAVICONS, json!(theme.rfg_favicons));
        if let Some(css) = &theme.bootstrap_css {
            set(keys::BOOTSTRAP_CSS, path_value(css));
        }
        set(keys::THEME_CSS_OVERRIDES, paths_value(&theme.css_overrides));
        if let Some(style) = &theme.pygments_style {
            set(keys::PYGMENTS_STYLE, json!(style));
        }
        set(
            keys::THEME_TEMPLATES_OVERRIDES,
            paths_value(&theme.template_overrides),
        );

        Ok(Self { settings })
    }

    /// Look up a setting by engine name.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.settings.get(key)
    }

    /// Setting names in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let value = JsonValue::Object(self.settings.clone());
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}

fn path_value(path: &Path) -> JsonValue {
    JsonValue::String(path.to_string_lossy().into_owned())
}

fn paths_value(paths: &[PathBuf]) -> JsonValue {
    JsonValue::Array(paths.iter().map(|p| path_value(p)).collect())
}
