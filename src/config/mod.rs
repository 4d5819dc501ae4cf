//! Configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [content]
//! │   └── reading    # [reading]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # FolioConfig (this file)
//! ```
//!
//! The file is optional: without one, every section uses its defaults and
//! the project root is the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ContentConfig, ReadingConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::debug;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    #[serde(skip)]
    pub root: PathBuf,

    /// Reading-time settings
    #[serde(default)]
    pub reading: ReadingConfig,

    /// Article location settings
    #[serde(default)]
    pub content: ContentConfig,
}

impl FolioConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for `--config`, then applies
    /// command-specific overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let mut config = Self::discover(&cli.config, &cwd)?;
        config.apply_command_options(cli);
        Ok(config)
    }

    /// Find, parse, normalize and validate the config starting at `start`.
    pub fn discover(config_name: &Path, start: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name, start) else {
            debug!("config"; "no {} found, using defaults", config_name.display());
            let mut config = Self::default();
            config.finalize(start);
            return Ok(config);
        };

        debug!("config"; "loading {}", config_path.display());
        let mut config = Self::from_path(&config_path)?;
        config.validate_paths()?;

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = crate::utils::path::normalize_path(&config_path);
        config.finalize(&root);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::new();
            for field in ignored {
                diag.warn(field);
            }
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Resolve root-relative paths.
    fn finalize(&mut self, root: &Path) {
        self.root = crate::utils::path::normalize_path(root);
        let root = self.root.clone();
        self.content.normalize(&root);
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::ReadingTime { args } => {
                Self::update_option(&mut self.reading.words_per_minute, args.wpm.as_ref());
            }
            Commands::Scan { args } => {
                if args.drafts {
                    self.content.skip_drafts = false;
                }
            }
            Commands::Status { .. }
            | Commands::Date { .. }
            | Commands::LikeUrl { .. }
            | Commands::Href { .. }
            | Commands::Social { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Must run before `finalize()`, which turns every path absolute.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.content.validate_paths(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate all sections, reporting every error at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.reading.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FolioConfig {
    let (parsed, ignored) = FolioConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(FolioConfig::from_str("[reading\nwords_per_minute = 1").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[reading]\nwords_per_minute = 180\nspeed = 3\n[unknown_section]\nfield = 1";
        let (config, ignored) = FolioConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.reading.words_per_minute, 180);
        assert!(ignored.iter().any(|f| f == "reading.speed"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::discover(Path::new("folio.toml"), dir.path()).unwrap();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.reading.words_per_minute, 200);
        assert!(config.content.dir.ends_with("content"));
        assert!(config.content.dir.is_absolute());
    }

    #[test]
    fn test_discover_resolves_content_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[content]\ndir = \"posts\"\n[reading]\nwords_per_minute = 240\n",
        )
        .unwrap();
        let nested = dir.path().join("posts/react");
        fs::create_dir_all(&nested).unwrap();

        let config = FolioConfig::discover(Path::new("folio.toml"), &nested).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.root, root);
        assert_eq!(config.content.dir, root.join("posts"));
        assert_eq!(config.reading.words_per_minute, 240);
        assert_eq!(
            config.root_relative(root.join("posts/react/a.md")),
            PathBuf::from("posts/react/a.md")
        );
    }

    #[test]
    fn test_discover_reports_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[reading]\nwords_per_minute = 0\n",
        )
        .unwrap();

        let err = FolioConfig::discover(Path::new("folio.toml"), dir.path()).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::Diagnostics(d) if d.errors().len() == 1));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = FolioConfig::default();
        let cli = Cli::parse_from(["folio", "reading-time", "--wpm", "300"]);
        config.apply_command_options(&cli);
        assert_eq!(config.reading.words_per_minute, 300);

        let cli = Cli::parse_from(["folio", "scan", "--drafts"]);
        config.apply_command_options(&cli);
        assert!(!config.content.skip_drafts);
    }
}
