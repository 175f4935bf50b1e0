//! `[meta]` section configuration.
//!
//! Which header fields are recognized and how reading time is estimated.
//!
//! # Example
//!
//! ```toml
//! [meta]
//! fields = ["title", "description", "image", "author", "createdAt",
//!           "authorImage", "category", "categories", "draft"]
//! words_per_minute = 225
//! ```
//!
//! The order of `fields` matters: a value ends at the next declared name
//! followed by `:`, except for the last name, which ends a value even
//! without a colon.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::{DEFAULT_FIELDS, FieldList, RESERVED_FIELDS};

/// Header field and reading time settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// Recognized header field names, in order.
    pub fields: Vec<String>,

    /// Reading speed used for `readingTime`.
    pub words_per_minute: u32,
}

/// Field paths of `[meta]`, for diagnostics.
pub struct MetaConfigFields {
    pub fields: FieldPath,
    pub words_per_minute: FieldPath,
}

impl MetaConfig {
    pub const FIELDS: MetaConfigFields = MetaConfigFields {
        fields: FieldPath::new("meta.fields"),
        words_per_minute: FieldPath::new("meta.words_per_minute"),
    };

    /// Declared field names as a parser field list.
    pub fn field_list(&self) -> FieldList {
        FieldList::new(self.fields.iter().cloned())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.fields.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.fields,
                "at least one field is required",
                "remove the key to use the default field list",
            );
        }

        let mut seen = HashSet::new();
        for name in &self.fields {
            if name.is_empty() {
                diag.error(Self::FIELDS.fields, "field names must not be empty");
            } else if name.contains(':') || name.chars().any(char::is_whitespace) {
                diag.error(
                    Self::FIELDS.fields,
                    format!("field name \"{name}\" must not contain `:` or whitespace"),
                );
            } else if RESERVED_FIELDS.contains(&name.as_str()) {
                diag.error_with_hint(
                    Self::FIELDS.fields,
                    format!("field \"{name}\" is reserved for a computed record key"),
                    format!("reserved names: {}", RESERVED_FIELDS.join(", ")),
                );
            } else if !seen.insert(name.as_str()) {
                diag.error(
                    Self::FIELDS.fields,
                    format!("field \"{name}\" is declared more than once"),
                );
            }
        }

        if self.words_per_minute == 0 {
            diag.error(
                Self::FIELDS.words_per_minute,
                "words_per_minute must be greater than 0",
            );
        }
    }
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|s| (*s).to_string()).collect(),
            words_per_minute: 225,
        }
    }
}
