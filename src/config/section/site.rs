//! `[site]` section configuration.
//!
//! Identity of the blog: who writes it, what it is called, where it lives.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "Grant Paton-Simpson & Ben Denham"
//! name = "The When of Python Blog"
//! subtitle = "Guidance on when to use Python features (and when not to)"
//! description = '<div class="text-muted">Comment your opinions on our articles.</div>'
//! image = "images/logo.png"
//! url = ""                    # empty: links are generated relative
//! timezone = "Pacific/Auckland"
//! language = "en"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Site metadata handed to the engine and the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Author display name.
    #[config(inline_doc = "Author display name.")]
    pub author: String,

    /// Site title.
    #[config(inline_doc = "Site title.")]
    pub name: String,

    /// Tagline shown under the title.
    #[config(inline_doc = "Tagline shown under the title.")]
    pub subtitle: String,

    /// HTML fragment shown in the page head and footer.
    /// Kept verbatim, including surrounding whitespace.
    pub description: String,

    /// Logo path (relative to the content directory).
    pub image: Option<PathBuf>,

    /// Base URL for generated links. Leave empty for relative links.
    #[config(inline_doc = "Base URL, empty for relative links.")]
    pub url: String,

    /// IANA timezone name used to date articles.
    #[config(default = "UTC", inline_doc = "IANA timezone name.")]
    pub timezone: String,

    /// Default content language code.
    #[config(default = "en", inline_doc = "Default content language.")]
    pub language: String,

    /// Generate document-relative URLs (useful while developing).
    #[config(inline_doc = "Document-relative URLs.")]
    pub relative_urls: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            subtitle: String::new(),
            description: String::new(),
            image: None,
            url: String::new(),
            timezone: "UTC".into(),
            language: "en".into(),
            relative_urls: false,
        }
    }
}

impl SiteInfoConfig {
    /// Whether links are generated relative (empty `url`).
    pub fn is_relative(&self) -> bool {
        self.url.is_empty()
    }

    /// Check site metadata.
    ///
    /// # Checks
    /// - non-empty `url` must be an http(s) URL with a host
    /// - `image` must exist under the content directory
    /// - empty `name` / `timezone` are reported as warnings
    pub fn validate(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.warn(Self::FIELDS.name, "site name is empty");
        }

        if self.timezone.trim().is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.timezone,
                "timezone is empty, article dates will use the engine default",
                "set an IANA name, e.g. \"Pacific/Auckland\"",
            );
        }

        if let Some(image) = &self.image
            && !content_dir.join(image).is_file()
        {
            diag.error(
                Self::FIELDS.image,
                format!("site image '{}' not found in content", image.display()),
            );
        }

        self.validate_url(diag);
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.is_relative() {
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if self.relative_urls {
                    diag.warn(
                        Self::FIELDS.relative_urls,
                        format!(
                            "relative URLs are enabled while {} is absolute",
                            Self::FIELDS.url
                        ),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com, or \"\" for relative links",
                );
            }
        }
    }
}
