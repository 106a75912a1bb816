//! File system path helpers.

use std::path::{Path, PathBuf};

/// Make a path absolute.
///
/// Existing paths are canonicalized (symlinks, `.` and `..` resolved).
/// Missing paths are joined onto the current directory untouched, so an
/// `extends` target that does not exist still reports a readable path.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}
