//! Page metadata extracted from a markdown header block.

use serde::Serialize;

use super::JsonMap;
use super::fields::FieldParser;
use super::header::HeaderBlock;

/// Draft flag when the document has no header block.
pub const DRAFT_WITHOUT_HEADER: &str = "true";
/// Draft flag when a header block exists but sets no `draft:` value.
pub const DRAFT_WITH_HEADER: &str = "false";

/// Keys the record builder fills in itself. A header field with one of
/// these names is never stored.
pub const RESERVED_FIELDS: &[&str] = &[
    "path",
    "name",
    "objectID",
    "tags",
    "readingTime",
    "createdAtTimeStamp",
    "markdown",
];

/// Page metadata from the header block of a markdown file
///
/// # Standard Fields
///
/// | Field         | Type             | Description                          |
/// |---------------|------------------|--------------------------------------|
/// | `draft`       | `String`         | `"true"` / `"false"`, always present |
/// | `markdown`    | `String`         | Body with the header block removed   |
/// | `title`       | `Option<String>` | Page title                           |
/// | `description` | `Option<String>` | Brief description                    |
/// | `image`       | `Option<String>` | Cover image                          |
/// | `author`      | `Option<String>` | Author name                          |
/// | `createdAt`   | `Option<String>` | Publication date (unparsed)          |
/// | `authorImage` | `Option<String>` | Author avatar                        |
/// | `category`    | `Option<String>` | Main category                        |
/// | `categories`  | `Option<String>` | Comma-separated categories           |
///
/// Fields missing from the header stay `None`, never `""`.
///
/// # Custom Fields (`extra`)
///
/// Names added to `[meta] fields` beyond the standard ones are captured in
/// `extra` as JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub draft: String,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Additional configured fields.
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            draft: DRAFT_WITHOUT_HEADER.to_string(),
            markdown: String::new(),
            title: None,
            description: None,
            image: None,
            author: None,
            created_at: None,
            author_image: None,
            category: None,
            categories: None,
            extra: JsonMap::new(),
        }
    }
}

impl PageMeta {
    /// Parse `content` with the fields known to `parser`.
    ///
    /// Without a header block the whole content is the body and the page is
    /// a draft. With one, the block is cut out of the body and the page is
    /// published unless its own `draft:` field says otherwise.
    pub fn parse(content: &str, parser: &FieldParser) -> Self {
        let Some(header) = HeaderBlock::find(content) else {
            return Self {
                markdown: content.to_string(),
                ..Self::default()
            };
        };

        let mut meta = Self {
            draft: DRAFT_WITH_HEADER.to_string(),
            markdown: header.body(),
            ..Self::default()
        };
        for field in parser.parse(header.as_str()) {
            meta.set(field.name, field.value());
        }
        meta
    }

    /// Set a field by its header name. Reserved names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "draft" => {
                self.draft = value;
                return;
            }
            _ if RESERVED_FIELDS.contains(&name) => return,
            "title" => &mut self.title,
            "description" => &mut self.description,
            "image" => &mut self.image,
            "author" => &mut self.author,
            "createdAt" => &mut self.created_at,
            "authorImage" => &mut self.author_image,
            "category" => &mut self.category,
            "categories" => &mut self.categories,
            _ => {
                self.extra
                    .insert(name.to_string(), serde_json::Value::String(value));
                return;
            }
        };
        *slot = Some(value);
    }

    /// Tags from `categories`, split on `,` without trimming.
    pub fn tags(&self) -> Option<Vec<String>> {
        self.categories
            .as_ref()
            .map(|c| c.split(',').map(str::to_string).collect())
    }
}
