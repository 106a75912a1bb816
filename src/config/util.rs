//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/blog.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

/// Resolve an `extends` target relative to the file that names it.
///
/// `~` is expanded; absolute targets are used as-is.
pub fn resolve_extends(from: &Path, target: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(target).into_owned());
    if expanded.is_absolute() {
        return expanded;
    }
    from.parent()
        .map_or_else(|| expanded.clone(), |dir| dir.join(&expanded))
}

/// Deep-merge `overlay` into `base`.
///
/// Tables merge key by key; any other value (arrays included) replaces
/// the base value wholesale.
pub fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
