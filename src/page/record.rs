//! Search index records.
//!
//! One [`IndexRecord`] is built per document:
//!
//! ```json
//! {
//!   "path": "/blog/2020/-post/",
//!   "name": "Post",
//!   "meta": {
//!     "path": "/blog/2020/-post/",
//!     "title": "Hello",
//!     "readingTime": 1,
//!     "createdAtTimeStamp": 0.0,
//!     "tags": ["a", "b"],
//!     "categories": "a,b",
//!     "draft": "false",
//!     "objectID": ":blog:2020:-post:"
//!   },
//!   "objectID": ":blog:2020:-post:"
//! }
//! ```
//!
//! The top-level `objectID` is filled in right before upload.

use serde::Serialize;

use crate::config::MetaConfig;
use crate::utils::{date::DateTimeUtc, text};

use super::JsonMap;
use super::document::RawDocument;
use super::fields::FieldParser;
use super::meta::PageMeta;
use super::route::{self, PageRoute};

/// Record submitted to the search index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexRecord {
    pub path: String,
    pub name: String,
    pub meta: RecordMeta,
    #[serde(rename = "objectID", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl IndexRecord {
    /// Fill the top-level `objectID` from `meta.objectID`, or from `path`
    /// when that is empty. Returns the identifier.
    pub fn ensure_object_id(&mut self) -> &str {
        if self.object_id.is_none() {
            let id = if self.meta.object_id.is_empty() {
                route::object_id(&self.path)
            } else {
                self.meta.object_id.clone()
            };
            self.object_id = Some(id);
        }
        self.object_id.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft == "true"
    }
}

/// Searchable metadata of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Minutes, rounded up.
    pub reading_time: u64,
    /// Seconds since the epoch; `0` without `createdAt`, NaN (JSON `null`)
    /// when `createdAt` does not parse.
    pub created_at_time_stamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub draft: String,
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Configured fields beyond the standard set.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Turns raw documents into index records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    parser: FieldParser,
    words_per_minute: u32,
}

impl RecordBuilder {
    pub fn new(parser: FieldParser, words_per_minute: u32) -> Self {
        Self {
            parser,
            words_per_minute,
        }
    }

    /// Builder for the `[meta]` settings.
    pub fn from_config(meta: &MetaConfig) -> Result<Self, regex::Error> {
        Ok(Self::new(
            FieldParser::new(meta.field_list())?,
            meta.words_per_minute,
        ))
    }

    pub fn build(&self, doc: &RawDocument) -> IndexRecord {
        let meta = PageMeta::parse(&doc.content, &self.parser);
        let route = PageRoute::new(&doc.root_path, &doc.filename);
        let reading_time = text::reading_time(&meta.markdown, self.words_per_minute);
        let created_at_time_stamp = meta
            .created_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .map_or(0.0, timestamp_secs);
        let tags = meta.tags();

        let PageMeta {
            draft,
            title,
            description,
            image,
            author,
            created_at,
            category,
            categories,
            extra,
            ..
        } = meta;

        IndexRecord {
            path: route.path.clone(),
            name: route.name,
            meta: RecordMeta {
                path: route.path,
                title,
                description,
                created_at,
                reading_time,
                created_at_time_stamp,
                tags,
                category,
                categories,
                author,
                image,
                draft,
                object_id: route.object_id,
                extra,
            },
            object_id: None,
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(FieldParser::default(), MetaConfig::default().words_per_minute)
    }
}

/// Seconds since the epoch for a `createdAt` value, NaN when unparseable.
#[allow(clippy::cast_precision_loss)] // Millisecond timestamps fit in f64
pub fn timestamp_secs(value: &str) -> f64 {
    DateTimeUtc::parse(value).map_or(f64::NAN, |dt| dt.to_unix_millis() as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fields::FieldList;

    fn build(filename: &str, root_path: &str, content: &str) -> IndexRecord {
        RecordBuilder::default().build(&RawDocument::new(filename, root_path, content))
    }

    #[test]
    fn test_build_example_post() {
        let record = build(
            "Post.md",
            "/blog/2020",
            "---\ntitle: Hello\ncategories: a,b\n---\nBody text here",
        );
        assert_eq!(record.path, "/blog/2020/-post/");
        assert_eq!(record.name, "Post");
        assert_eq!(record.meta.path, "/blog/2020/-post/");
        assert_eq!(record.meta.title.as_deref(), Some("Hello"));
        assert_eq!(record.meta.categories.as_deref(), Some("a,b"));
        assert_eq!(
            record.meta.tags,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(record.meta.draft, "false");
        assert_eq!(record.meta.object_id, ":blog:2020:-post:");
        assert_eq!(record.meta.reading_time, 1);
        assert_eq!(record.meta.created_at_time_stamp, 0.0);
        assert!(record.object_id.is_none());
    }

    #[test]
    fn test_build_object_id_from_filename() {
        let record = build("MyPost.md", "/blog/2021", "text");
        assert_eq!(record.meta.object_id, ":blog:2021:-my-post:");
        assert_eq!(record.name, "MyPost");
    }

    #[test]
    fn test_build_without_header_is_draft() {
        let record = build("note.md", "/blog/2021", "just some words");
        assert!(record.is_draft());
        assert!(record.meta.title.is_none());
        assert!(record.meta.tags.is_none());
    }

    #[test]
    fn test_timestamp() {
        let record = build("p.md", "/blog/2021", "---\ncreatedAt: 2021-05-01\n---\n");
        assert_eq!(record.meta.created_at.as_deref(), Some("2021-05-01"));
        assert_eq!(record.meta.created_at_time_stamp, 1_619_827_200.0);

        let record = build(
            "p.md",
            "/blog/2021",
            "---\ncreatedAt: 2021-05-01T10:00:00.500Z\n---\n",
        );
        assert_eq!(record.meta.created_at_time_stamp, 1_619_863_200.5);
    }

    #[test]
    fn test_empty_created_at_is_zero() {
        let record = build("p.md", "/blog/2021", "---\ntitle: x\ncreatedAt:\n---\nbody");
        assert_eq!(record.meta.created_at.as_deref(), Some(""));
        assert_eq!(record.meta.created_at_time_stamp, 0.0);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["meta"]["createdAtTimeStamp"], 0.0);
    }

    #[test]
    fn test_reserved_field_names_do_not_duplicate_keys() {
        let parser = FieldParser::new(FieldList::new(["title", "path", "objectID", "draft"])).unwrap();
        let record = RecordBuilder::new(parser, 225).build(&RawDocument::new(
            "Post.md",
            "/blog/2020",
            "---\ntitle: T\npath: /evil/\nobjectID: x\n---\nbody",
        ));

        let body = serde_json::to_string(&record).unwrap();
        assert_eq!(body.matches(r#""path":"#).count(), 2); // top level and meta
        assert_eq!(body.matches(r#""objectID":"#).count(), 1);
        assert!(!body.contains("/evil/"));
        assert_eq!(record.meta.path, "/blog/2020/-post/");
        assert_eq!(record.meta.object_id, ":blog:2020:-post:");
    }

    #[test]
    fn test_unparseable_date_is_nan() {
        let record = build("p.md", "/blog/2021", "---\ncreatedAt: someday\n---\n");
        assert!(record.meta.created_at_time_stamp.is_nan());

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["meta"]["createdAtTimeStamp"].is_null());
        assert_eq!(json["meta"]["createdAt"], "someday");
    }

    #[test]
    fn test_reading_time_uses_body_only() {
        let header_words = vec!["word"; 300].join(" ");
        let content = format!("---\ndescription: {header_words}\n---\nshort body");
        let record = build("p.md", "/blog/2021", &content);
        assert_eq!(record.meta.reading_time, 1);

        let body = vec!["word"; 226].join(" ");
        let record = build("p.md", "/blog/2021", &format!("---\ntitle: x\n---\n{body}"));
        assert_eq!(record.meta.reading_time, 2);
    }

    #[test]
    fn test_custom_words_per_minute() {
        let builder = RecordBuilder::new(FieldParser::default(), 2);
        let record = builder.build(&RawDocument::new("p.md", "/b", "one two three"));
        assert_eq!(record.meta.reading_time, 2);
    }

    #[test]
    fn test_extra_fields_are_flattened() {
        let meta = MetaConfig {
            fields: vec!["title".into(), "series".into(), "draft".into()],
            ..MetaConfig::default()
        };
        assert_eq!(meta.field_list(), FieldList::new(["title", "series", "draft"]));
        let builder = RecordBuilder::from_config(&meta).unwrap();
        let record = builder.build(&RawDocument::new(
            "p.md",
            "/blog/2021",
            "---\ntitle: T\nseries: Rust\n---\n",
        ));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["meta"]["series"], "Rust");
        assert_eq!(json["meta"]["title"], "T");
    }

    #[test]
    fn test_ensure_object_id() {
        let mut record = build("MyPost.md", "/blog/2021", "text");
        assert_eq!(record.ensure_object_id(), ":blog:2021:-my-post:");
        assert_eq!(record.object_id.as_deref(), Some(":blog:2021:-my-post:"));

        let mut record = build("MyPost.md", "/blog/2021", "text");
        record.meta.object_id.clear();
        record.path = "/custom/path/".to_string();
        assert_eq!(record.ensure_object_id(), ":custom:path:");

        let mut record = build("MyPost.md", "/blog/2021", "text");
        record.object_id = Some("fixed".to_string());
        assert_eq!(record.ensure_object_id(), "fixed");
    }

    #[test]
    fn test_serialized_shape() {
        let mut record = build(
            "Post.md",
            "/blog/2020",
            "---\ntitle: Hello\nauthorImage: a.png\ncategories: a,b\n---\nBody text here",
        );
        record.ensure_object_id();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["objectID"], ":blog:2020:-post:");
        assert_eq!(json["meta"]["objectID"], ":blog:2020:-post:");
        assert_eq!(json["meta"]["readingTime"], 1);
        assert_eq!(json["meta"]["tags"], serde_json::json!(["a", "b"]));
        assert!(json["meta"].get("description").is_none());
        assert!(json["meta"].get("markdown").is_none());
        assert!(json["meta"].get("authorImage").is_none());

        let keys: Vec<_> = json["meta"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "path",
                "title",
                "readingTime",
                "createdAtTimeStamp",
                "tags",
                "categories",
                "draft",
                "objectID"
            ]
        );
    }
}
