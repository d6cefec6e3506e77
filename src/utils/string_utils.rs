//! UTF-8-safe string helpers
//!
//! Article text and URL titles are frequently Persian, so every slice taken here
//! respects character boundaries and never panics on multi-byte input.

use regex::RegexBuilder;

use super::constants::MIN_TOKEN_CHARS;

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use kodegen_tools_interlink::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
///
/// // Persian letters are two bytes each
/// assert_eq!(safe_truncate_chars("گلدان سفالی", 5), "گلدان");
///
/// // String shorter than max_chars
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// True when `word` is long enough to be used as a matching token.
#[inline]
pub fn is_significant(word: &str) -> bool {
    word.chars().count() > MIN_TOKEN_CHARS
}

/// Word characters for boundary checks.
///
/// ZWNJ (U+200C) glues Persian word parts together (`می‌خواهم`), so it counts
/// as part of a word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\u{200c}'
}

/// Find `needle` in `haystack` ignoring case and return the matched slice of
/// `haystack`, preserving its original casing.
pub fn find_case_insensitive<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    if needle.trim().is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(haystack).map(|m| m.as_str())
}

/// Like [`find_case_insensitive`], but the match must not be glued to
/// neighbouring word characters.
pub fn find_word_case_insensitive<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    if needle.trim().is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find_iter(haystack)
        .find(|m| has_word_boundaries(haystack, m.start(), m.end()))
        .map(|m| m.as_str())
}

/// Check that the byte range `start..end` of `text` is not part of a longer word.
pub fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

/// Trim punctuation (Latin and Persian) from both ends of a phrase.
pub fn trim_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '،' | '؛' | '؟' | '«' | '»')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_case_insensitive_preserves_case() {
        assert_eq!(
            find_case_insensitive("Buy Garden Tools today", "garden tools"),
            Some("Garden Tools")
        );
        assert_eq!(find_case_insensitive("nothing here", "garden"), None);
        assert_eq!(find_case_insensitive("anything", "  "), None);
    }

    #[test]
    fn test_find_word_rejects_partial_words() {
        assert_eq!(find_word_case_insensitive("gardening is fun", "garden"), None);
        assert_eq!(
            find_word_case_insensitive("gardening and the Garden", "garden"),
            Some("Garden")
        );
    }

    #[test]
    fn test_persian_boundaries() {
        let text = "خرید گلدان سفالی";
        assert_eq!(find_word_case_insensitive(text, "گلدان"), Some("گلدان"));
        assert_eq!(find_word_case_insensitive("گلدان‌ها", "گلدان"), None);
    }

    #[test]
    fn test_trim_punctuation() {
        assert_eq!(trim_punctuation("«کود گیاه»،"), "کود گیاه");
        assert_eq!(trim_punctuation("(tools),"), "tools");
    }

    #[test]
    fn test_is_significant_counts_chars() {
        assert!(is_significant("کود"));
        assert!(!is_significant("گل"));
        assert!(!is_significant("ab"));
    }
}
