//! Header block detection.
//!
//! A header block is the smallest span that starts with `---` and ends with
//! the next `---`. Markers are matched anywhere in the text, not only at the
//! start of a line, and the span may cover any number of lines.
//!
//! ```text
//! ---                 ┐
//! title: Hello        │ header block
//! ---                 ┘
//! Body text here        body
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::text;

/// Opening and closing marker of a header block.
pub const MARKER: &str = "---";

/// Non-greedy span between two markers. Line and paragraph separators
/// (U+2028, U+2029) never occur inside a block.
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---[^\x{2028}\x{2029}]*?---").unwrap());

/// A header block located inside a document.
///
/// Borrows the full document so the surrounding text stays addressable:
/// `prefix() + as_str() + suffix()` is always the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock<'a> {
    source: &'a str,
    span: Range<usize>,
}

impl<'a> HeaderBlock<'a> {
    /// Locate the header block in `content`.
    ///
    /// Detection runs on the trimmed document; the returned span is
    /// relative to the untrimmed text so leading whitespace ends up in the
    /// body.
    pub fn find(content: &'a str) -> Option<Self> {
        let trimmed = text::trim(content);
        if trimmed.is_empty() {
            return None;
        }

        let found = RE_HEADER.find(trimmed)?;
        let offset = text::leading_blank_len(content);

        Some(Self {
            source: content,
            span: offset + found.start()..offset + found.end(),
        })
    }

    /// Raw block text, both markers included.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.span.clone()]
    }

    /// Text before the block.
    #[inline]
    pub fn prefix(&self) -> &'a str {
        &self.source[..self.span.start]
    }

    /// Text after the block.
    #[inline]
    pub fn suffix(&self) -> &'a str {
        &self.source[self.span.end..]
    }

    /// Document with exactly this block removed.
    pub fn body(&self) -> String {
        let mut body = String::with_capacity(self.source.len() - self.span.len());
        body.push_str(self.prefix());
        body.push_str(self.suffix());
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_simple() {
        let content = "---\ntitle: Hello\n---\nBody text here";
        let header = HeaderBlock::find(content).unwrap();
        assert_eq!(header.as_str(), "---\ntitle: Hello\n---");
        assert_eq!(header.body(), "\nBody text here");
        assert_eq!(header.span, 0..20);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(HeaderBlock::find("").is_none());
        assert!(HeaderBlock::find("  \n\t").is_none());
    }

    #[test]
    fn test_no_markers() {
        assert!(HeaderBlock::find("# Title\n\nJust a body.").is_none());
    }

    #[test]
    fn test_single_marker_is_not_a_header() {
        assert!(HeaderBlock::find("---\ntitle: Hello\nno closing marker").is_none());
        assert!(HeaderBlock::find("----").is_none());
        assert!(HeaderBlock::find("-----").is_none());
    }

    #[test]
    fn test_adjacent_markers() {
        let header = HeaderBlock::find("------rest").unwrap();
        assert_eq!(header.as_str(), "------");
        assert_eq!(header.body(), "rest");
    }

    #[test]
    fn test_non_greedy_stops_at_first_closing_marker() {
        let content = "---\na: 1\n---\nbody\n---\nmore\n---\n";
        let header = HeaderBlock::find(content).unwrap();
        assert_eq!(header.as_str(), "---\na: 1\n---");
        assert_eq!(header.body(), "\nbody\n---\nmore\n---\n");
    }

    #[test]
    fn test_markers_inside_a_line() {
        let header = HeaderBlock::find("intro --- inline --- outro").unwrap();
        assert_eq!(header.as_str(), "--- inline ---");
        assert_eq!(header.body(), "intro  outro");
    }

    #[test]
    fn test_leading_whitespace_kept_in_body() {
        let content = "\n\n  ---\ntitle: x\n---\nbody";
        let header = HeaderBlock::find(content).unwrap();
        assert_eq!(header.prefix(), "\n\n  ");
        assert_eq!(header.as_str(), "---\ntitle: x\n---");
        assert_eq!(header.body(), "\n\n  \nbody");
    }

    #[test]
    fn test_leading_bom_kept_in_body() {
        let content = "\u{feff}---\ntitle: x\n---\nbody";
        let header = HeaderBlock::find(content).unwrap();
        assert_eq!(header.prefix(), "\u{feff}");
        assert_eq!(header.as_str(), "---\ntitle: x\n---");
    }

    #[test]
    fn test_crlf_header() {
        let content = "---\r\ntitle: x\r\n---\r\nbody";
        let header = HeaderBlock::find(content).unwrap();
        assert_eq!(header.as_str(), "---\r\ntitle: x\r\n---");
        assert_eq!(header.body(), "\r\nbody");
    }

    #[test]
    fn test_paragraph_separator_blocks_span() {
        assert!(HeaderBlock::find("---\u{2028}---").is_none());
        // A later pair without separators still matches.
        let header = HeaderBlock::find("---\u{2029}--- x ---").unwrap();
        assert_eq!(header.as_str(), "--- x ---");
    }

    #[test]
    fn test_round_trip() {
        for content in [
            "---\ntitle: Hello\n---\nBody",
            "  \n---\na: b\n---\n\nmore --- text",
            "prefix ---x--- suffix",
            "\u{feff}---\r\nx: y\r\n---",
        ] {
            let header = HeaderBlock::find(content).unwrap();
            let rebuilt = format!("{}{}{}", header.prefix(), header.as_str(), header.suffix());
            assert_eq!(rebuilt, content);
            assert_eq!(
                format!("{}{}", header.prefix(), header.suffix()),
                header.body()
            );
        }
    }
}
