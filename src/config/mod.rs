//! Configuration management for `tola-index.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── index      # [index]
//! │   ├── meta       # [meta]
//! │   └── source     # [source]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # IndexConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[source]` | Content directory, path prefix, ignored names  |
//! | `[meta]`   | Recognized header fields, reading speed        |
//! | `[index]`  | Index name, credentials, endpoint override     |
//!
//! The file is optional: without one every section takes its defaults and
//! the credentials come from the command line.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{IndexSectionConfig, MetaConfig, SourceConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, DEFAULT_CONFIG};
use crate::utils::path::{normalize_path, resolve_path};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing tola-index.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory relative paths resolve against: the config file's parent,
    /// or the working directory without a config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Document source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Header field settings
    #[serde(default)]
    pub meta: MetaConfig,

    /// Search index settings
    #[serde(default)]
    pub index: IndexSectionConfig,
}

impl IndexConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing default file
    /// is fine; a missing file named with `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", normalize_path(&path).display());
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map_or_else(|| cwd.clone(), Path::to_path_buf);
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG) => {
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.finalize(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides and resolve paths.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        self.root = normalize_path(&self.root);
        self.source.dir = match &cli.content {
            // CLI paths are relative to where the command runs
            Some(content) => resolve_path(content, cwd),
            None => resolve_path(&self.source.dir, &self.root),
        };
        self.apply_index_options(cli);
    }

    /// Apply `--index`, `--app-id` and `--app-key`.
    fn apply_index_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.index.name, cli.index.as_ref());
        Self::update_option(&mut self.index.app_id, cli.app_id.as_ref());
        Self::update_option(&mut self.index.app_key, cli.app_key.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut Option<T>, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = Some(option.clone());
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
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

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.source.validate(&mut diag);
        self.meta.validate(&mut diag);
        self.index.validate(&mut diag);
        diag.into_result()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IndexConfig {
    let (parsed, ignored) = IndexConfig::parse_with_ignored(content).unwrap();
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
