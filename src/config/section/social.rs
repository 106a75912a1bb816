//! `[social]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [social]
//! icons = [
//!     ["fa-brands fa-twitter", "https://twitter.com/WhenOfPython"],
//!     { class = "fa-brands fa-github", url = "https://github.com/when-of-python" },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "social")]
pub struct SocialConfig {
    /// Social links as (icon class, URL) pairs, rendered in order.
    pub icons: Vec<IconEntry>,
}

impl SocialConfig {
    /// Icons as plain pairs, in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.icons.iter().map(IconEntry::as_pair)
    }

    /// Report icons missing a class or a link.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, (class, url)) in self.pairs().enumerate() {
            if class.trim().is_empty() {
                diag.warn(Self::FIELDS.icons, format!("[{idx}] icon class is empty"));
            }
            if url.trim().is_empty() {
                diag.warn(Self::FIELDS.icons, format!("[{idx}] icon link is empty"));
            }
        }
    }
}

// ============================================================================
// Icon Entry
// ============================================================================

/// One social link.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconEntry {
    /// `["class", "url"]`
    Pair(String, String),
    /// `{ class = "...", url = "..." }`
    Table { class: String, url: String },
}

impl IconEntry {
    pub fn new(class: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Pair(class.into(), url.into())
    }

    /// Icon CSS class, e.g. `fa-brands fa-github`.
    pub fn class(&self) -> &str {
        match self {
            Self::Pair(class, _) | Self::Table { class, .. } => class,
        }
    }

    /// Link target.
    pub fn url(&self) -> &str {
        match self {
            Self::Pair(_, url) | Self::Table { url, .. } => url,
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (self.class(), self.url())
    }
}

impl PartialEq for IconEntry {
    fn eq(&self, other: &Self) -> bool {
        self.as_pair() == other.as_pair()
    }
}
