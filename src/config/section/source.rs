//! `[source]` section configuration.
//!
//! Where markdown documents are discovered and how their index paths start.
//!
//! # Example
//!
//! ```toml
//! [source]
//! dir = "blog"                # Content directory, one subdirectory per group
//! prefix = "/blog"            # Index path prefix, joined with the group name
//! ignored = [".DS_Store"]     # File names never read as documents
//! ```
//!
//! With the defaults, `blog/2021/MyPost.md` becomes `/blog/2021/-my-post/`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Document source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Content directory. Relative paths resolve against the config file's
    /// directory; `~` is expanded.
    pub dir: PathBuf,

    /// Index path prefix (no trailing slash).
    pub prefix: String,

    /// File names skipped during discovery.
    pub ignored: Vec<String>,
}

/// Field paths of `[source]`, for diagnostics.
pub struct SourceConfigFields {
    pub dir: FieldPath,
    pub prefix: FieldPath,
    pub ignored: FieldPath,
}

impl SourceConfig {
    pub const FIELDS: SourceConfigFields = SourceConfigFields {
        dir: FieldPath::new("source.dir"),
        prefix: FieldPath::new("source.prefix"),
        ignored: FieldPath::new("source.ignored"),
    };

    /// Index path root for a group directory (e.g., `/blog` + `2021`).
    pub fn root_path(&self, group: &str) -> String {
        format!("{}/{}", self.prefix, group)
    }

    /// Check if a file name is on the ignore list.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignored.iter().any(|name| name == file_name)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prefix.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.prefix,
                format!("prefix must not end with `/`, got \"{}\"", self.prefix),
                format!("use \"{}\"", self.prefix.trim_end_matches('/')),
            );
        }
        if self.ignored.iter().any(String::is_empty) {
            diag.error(Self::FIELDS.ignored, "ignored file names must not be empty");
        }
        if self.dir.as_os_str().is_empty() {
            diag.error(Self::FIELDS.dir, "content directory must not be empty");
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("blog"),
            prefix: "/blog".to_string(),
            ignored: vec![".DS_Store".to_string()],
        }
    }
}
