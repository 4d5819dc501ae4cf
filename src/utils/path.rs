//! Path normalization.

use std::path::{Path, PathBuf};

/// Absolute form of `path`.
///
/// Canonicalizes when the path exists; otherwise joins relative paths onto
/// the current directory without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a user-supplied path: absolute as-is, cwd-relative if it exists,
/// else relative to `fallback_dir`.
///
/// Lets `folio scan react/hooks.md` work from the project root as well as
/// `folio scan content/react/hooks.md`.
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}
