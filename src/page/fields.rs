//! Header field extraction.
//!
//! Header blocks are not parsed as YAML. A field's value is everything after
//! `name:` up to the next *boundary token*: any declared field name followed
//! by `:`, or the closing `---`. Values may therefore span several lines and
//! contain arbitrary punctuation (dates, URLs, colons).
//!
//! # Boundary tokens
//!
//! The boundary set is derived from the declared field list, in order. The
//! last declared name is used **without** its colon, so with the default
//! list a value containing the word `draft` ends right before it:
//!
//! ```text
//! fields:     title, description, ..., categories, draft
//! boundaries: title:  description:  ...  categories:  draft  ---
//! ```
//!
//! Existing sites rely on this splitting, so it is kept as is. A value that
//! happens to contain a boundary token is cut short at that token.

use regex::Regex;

use crate::utils::text;

use super::header::MARKER;

/// Fields recognized when no field list is configured.
pub const DEFAULT_FIELDS: &[&str] = &[
    "title",
    "description",
    "image",
    "author",
    "createdAt",
    "authorImage",
    "category",
    "categories",
    "draft",
];

/// Ordered list of recognized header field names.
///
/// The order is significant: it decides which name loses its colon in the
/// boundary set (see module docs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList(Vec<String>);

impl FieldList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Tokens that terminate a field value, in declaration order.
    pub fn boundary_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = match self.0.split_last() {
            Some((last, rest)) => rest
                .iter()
                .map(|name| format!("{name}:"))
                .chain(std::iter::once(last.clone()))
                .collect(),
            None => Vec::new(),
        };
        tokens.push(MARKER.to_string());
        tokens
    }
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS.iter().copied())
    }
}

/// A recognized field found in a header block, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValue<'a> {
    /// Declared field name.
    pub name: &'a str,
    /// Text between `name:` and the next boundary token.
    pub raw: &'a str,
}

impl FieldValue<'_> {
    /// Normalized value.
    ///
    /// Drops the first `\r\n`, then the first `\n` (wherever they occur),
    /// then trims. Only one of each is removed, so on a three-line value the
    /// first two lines end up joined.
    pub fn value(&self) -> String {
        let value = self.raw.replacen("\r\n", "", 1).replacen('\n', "", 1);
        text::trim(&value).to_string()
    }
}

/// Compiled extractor for one field list.
#[derive(Debug, Clone)]
pub struct FieldParser {
    fields: FieldList,
    patterns: Vec<Regex>,
}

impl FieldParser {
    /// Compile one pattern per declared field.
    pub fn new(fields: FieldList) -> Result<Self, regex::Error> {
        let boundaries = fields
            .boundary_tokens()
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");

        let patterns = fields
            .names()
            .iter()
            .map(|name| {
                let pattern = format!(
                    r"{}:([^\x{{2028}}\x{{2029}}]*?)(?:{})",
                    regex::escape(name),
                    boundaries
                );
                Regex::new(&pattern)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields, patterns })
    }

    /// Extract every recognized field present in `header`.
    ///
    /// Results follow declaration order; each field yields at most one
    /// value (its leftmost occurrence).
    pub fn parse<'a>(&'a self, header: &'a str) -> Vec<FieldValue<'a>> {
        self.fields
            .names()
            .iter()
            .zip(&self.patterns)
            .filter_map(|(name, re)| {
                let caps = re.captures(header)?;
                let raw = caps.get(1)?.as_str();
                Some(FieldValue {
                    name: name.as_str(),
                    raw,
                })
            })
            .collect()
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new(FieldList::default()).expect("default field patterns are valid")
    }
}
