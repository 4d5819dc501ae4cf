//! `[content]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where articles live and which of them are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Article directory, relative to the config file.
    pub dir: PathBuf,

    /// Leave `draft: true` articles out of scan results.
    pub skip_drafts: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            skip_drafts: true,
        }
    }
}

impl ContentConfig {
    pub const DIR: FieldPath = FieldPath::new("content.dir");

    /// Check raw paths before they are joined with the project root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.is_absolute() {
            diag.error_with_hint(
                Self::DIR,
                format!("must be a relative path, got `{}`", self.dir.display()),
                "paths are resolved against the directory containing folio.toml",
            );
        }
    }

    pub fn normalize(&mut self, root: &Path) {
        self.dir = crate::utils::path::normalize_path(&root.join(&self.dir));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert!(config.content.skip_drafts);
    }

    #[test]
    fn test_parse() {
        let config = test_parse_config("[content]\ndir = \"posts\"\nskip_drafts = false");
        assert_eq!(config.content.dir, PathBuf::from("posts"));
        assert!(!config.content.skip_drafts);
    }

    #[test]
    fn test_absolute_dir_rejected() {
        let config = test_parse_config("[content]\ndir = \"/srv/posts\"");
        let mut diag = ConfigDiagnostics::new();
        config.content.validate_paths(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field, ContentConfig::DIR);
    }

    #[test]
    fn test_normalize_joins_root() {
        let mut config = ContentConfig::default();
        config.normalize(Path::new("/site"));
        assert_eq!(config.dir, PathBuf::from("/site/content"));
    }
}
