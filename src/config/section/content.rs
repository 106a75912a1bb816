//! `[content]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [content]
//! path = "content"             # Source content root (relative to site root)
//! pagination = 10              # Items per listing page
//! article_excludes = ["extras"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Items per listing page when `pagination` is not set.
pub const DEFAULT_PAGINATION: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Source content root (relative to site root).
    #[config(default = "content", inline_doc = "Source content root.")]
    pub path: PathBuf,

    /// Items per listing page. Must be a positive integer.
    #[config(inline_doc = "Items per listing page.")]
    pub pagination: NonZeroUsize,

    /// Directories under the content root never read as articles.
    pub article_excludes: Vec<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content".into(),
            pagination: DEFAULT_PAGINATION,
            article_excludes: Vec::new(),
        }
    }
}
