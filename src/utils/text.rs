//! Whitespace handling shared by header detection and reading time.
//!
//! Blank characters are Unicode whitespace plus the BOM (U+FEFF), minus
//! NEL (U+0085), which is the set web tooling treats as trimmable.

/// Check if a character counts as blank.
#[inline]
pub fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim blank characters from both ends.
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Byte offset of the first non-blank character (or `s.len()`).
#[inline]
pub fn leading_blank_len(s: &str) -> usize {
    s.len() - s.trim_start_matches(is_blank).len()
}

/// Count words separated by runs of blank characters.
///
/// Blank input still counts as one (empty) word, so the result is never 0.
///
/// # Examples
///
/// - `word_count("")` -> `1`
/// - `word_count("  one  ")` -> `1`
/// - `word_count("one two\nthree")` -> `3`
pub fn word_count(s: &str) -> usize {
    let trimmed = trim(s);
    if trimmed.is_empty() {
        return 1;
    }
    trimmed.split(is_blank).filter(|w| !w.is_empty()).count()
}

/// Minutes needed to read `s` at `words_per_minute`, rounded up.
pub fn reading_time(s: &str, words_per_minute: u32) -> u64 {
    let words = word_count(s) as u64;
    words.div_ceil(u64::from(words_per_minute.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_bom_and_whitespace() {
        assert_eq!(trim("\u{feff}  hello \n"), "hello");
        assert_eq!(trim("\u{a0}x\u{2003}"), "x");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_leading_blank_len() {
        assert_eq!(leading_blank_len("  \n---"), 3);
        assert_eq!(leading_blank_len("---"), 0);
        assert_eq!(leading_blank_len("   "), 3);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("one two\n\tthree"), 3);
        assert_eq!(word_count("  spaced   out  "), 2);
    }

    #[test]
    fn test_word_count_blank_is_one() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count(" \n\t "), 1);
    }

    #[test]
    fn test_reading_time_boundaries() {
        let words = |n: usize| vec!["word"; n].join(" ");

        assert_eq!(reading_time("single", 225), 1);
        assert_eq!(reading_time("", 225), 1);
        assert_eq!(reading_time(&words(225), 225), 1);
        assert_eq!(reading_time(&words(226), 225), 2);
        assert_eq!(reading_time(&words(450), 225), 2);
        assert_eq!(reading_time(&words(451), 225), 3);
    }

    #[test]
    fn test_reading_time_non_decreasing() {
        let mut text = String::new();
        let mut last = 0;
        for _ in 0..1000 {
            text.push_str(" w");
            let minutes = reading_time(&text, 225);
            assert!(minutes >= last);
            last = minutes;
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn test_reading_time_custom_speed() {
        assert_eq!(reading_time("a b c d", 2), 2);
        assert_eq!(reading_time("a b c d e", 2), 3);
    }
}
