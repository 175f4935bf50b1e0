//! Page types: header parsing, routing, and index records.
//!
//! ```text
//! RawDocument ──► HeaderBlock ──► FieldParser ──► PageMeta ─┐
//!      │                                                    ├──► IndexRecord
//!      └──────────────── filename ──► PageRoute ────────────┘
//! ```

mod document;
mod fields;
mod header;
mod meta;
mod record;
mod route;

pub use document::{RawDocument, collect_documents};
pub use fields::{DEFAULT_FIELDS, FieldList};
pub use meta::RESERVED_FIELDS;
pub use record::{IndexRecord, RecordBuilder};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
