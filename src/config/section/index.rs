//! `[index]` section configuration.
//!
//! Search index destination and credentials.
//!
//! # Example
//!
//! ```toml
//! [index]
//! name = "blog"                         # Index name
//! app_id = "ABCDEF1234"                 # Application id
//! app_key = "..."                       # Admin API key
//! host = "https://search.example.com"   # Optional endpoint override
//! ```
//!
//! Every key can also be given on the command line (`--index`, `--app-id`,
//! `--app-key`). Credentials are passed to the client as given; a missing
//! or wrong value surfaces as a failed upload.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Search index settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSectionConfig {
    /// Index name.
    pub name: Option<String>,

    /// Application id.
    pub app_id: Option<String>,

    /// API key with write access.
    pub app_key: Option<String>,

    /// Endpoint override. Defaults to `https://{app_id}.algolia.net`.
    pub host: Option<String>,
}

/// Field paths of `[index]`, for diagnostics.
pub struct IndexSectionConfigFields {
    pub name: FieldPath,
    pub app_id: FieldPath,
    pub app_key: FieldPath,
    pub host: FieldPath,
}

impl IndexSectionConfig {
    pub const FIELDS: IndexSectionConfigFields = IndexSectionConfigFields {
        name: FieldPath::new("index.name"),
        app_id: FieldPath::new("index.app_id"),
        app_key: FieldPath::new("index.app_key"),
        host: FieldPath::new("index.host"),
    };

    /// Endpoint base URL, from `host` or derived from `app_id`.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        match &self.host {
            Some(host) => Url::parse(host),
            None => Url::parse(&format!(
                "https://{}.algolia.net",
                self.app_id.as_deref().unwrap_or_default()
            )),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(host) = &self.host else {
            return;
        };
        match Url::parse(host) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => diag.error(
                Self::FIELDS.host,
                format!("unsupported scheme `{}`, expected http or https", url.scheme()),
            ),
            Err(e) => diag.error_with_hint(
                Self::FIELDS.host,
                format!("invalid URL \"{host}\": {e}"),
                "use a full URL, e.g.: \"https://search.example.com\"",
            ),
        }
    }
}
