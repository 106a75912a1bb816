//! `[feed]` section configuration.
//!
//! Each feed is an output path pattern; an absent key disables that feed.
//! Feeds are usually left disabled while developing and enabled by a
//! publish profile that `extends` the development one.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = "feeds/{slug}.atom.xml"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// Atom feed with every article.
    #[config(inline_doc = "Atom feed with every article.")]
    pub all_atom: Option<String>,

    /// Per-category Atom feeds.
    #[config(inline_doc = "Per-category Atom feeds.")]
    pub category_atom: Option<String>,

    /// Per-language Atom feeds.
    #[config(inline_doc = "Per-language Atom feeds.")]
    pub translation_atom: Option<String>,

    /// Per-author Atom feeds.
    #[config(inline_doc = "Per-author Atom feeds.")]
    pub author_atom: Option<String>,

    /// Per-author RSS feeds.
    #[config(inline_doc = "Per-author RSS feeds.")]
    pub author_rss: Option<String>,
}

impl FeedConfig {
    /// Whether any feed is generated.
    pub fn any_enabled(&self) -> bool {
        [
            &self.all_atom,
            &self.category_atom,
            &self.translation_atom,
            &self.author_atom,
            &self.author_rss,
        ]
        .iter()
        .any(|feed| feed.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_disable_every_feed() {
        let config = test_parse_config("");
        assert_eq!(config.feed, FeedConfig::default());
        assert!(!config.feed.any_enabled());
    }

    #[test]
    fn test_single_feed() {
        let config = test_parse_config("[feed]\nall_atom = \"feeds/all.atom.xml\"");
        assert_eq!(config.feed.all_atom.as_deref(), Some("feeds/all.atom.xml"));
        assert!(config.feed.category_atom.is_none());
        assert!(config.feed.any_enabled());
    }
}
