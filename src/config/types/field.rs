//! Dotted config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Path of a config key as written in `tola-index.toml`.
///
/// Each section exposes its paths as a `FIELDS` constant so diagnostics
/// never spell a key by hand:
///
/// ```ignore
/// diag.error(MetaConfig::FIELDS.words_per_minute, "must be greater than 0");
/// // [meta.words_per_minute]
/// // → must be greater than 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        assert_eq!(FieldPath::new("meta.fields").as_str(), "meta.fields");
    }

    #[test]
    fn test_field_path_display_contains_path() {
        let shown = FieldPath::new("source.dir").to_string();
        assert!(shown.contains("source.dir"));
    }
}
