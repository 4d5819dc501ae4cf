//! Configuration file discovery.

use std::path::{Path, PathBuf};

/// Find `config_name` in `start` or the nearest ancestor that has it.
///
/// Absolute names are returned as-is when they exist.
///
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/folio.toml      ← found
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================
