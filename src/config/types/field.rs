//! Dotted config key used to point diagnostics at a field.

use owo_colors::OwoColorize;
use std::fmt;

/// Path of a key inside `blog.toml`, e.g. `assets.static_paths`.
///
/// Generated per section by `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(ThemeConfig::FIELDS.path, "theme directory not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Section part of the path (`theme` for `theme.path`).
    pub fn section(&self) -> &'static str {
        self.0.rsplit_once('.').map_or("", |(section, _)| section)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
