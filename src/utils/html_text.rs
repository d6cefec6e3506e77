//! Plain-text views of article HTML.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_RE: hardcoded regex is valid"));

static ANCHOR_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<a(?:\s[^>]*)?>|</a\s*>").expect("ANCHOR_TAG_RE: hardcoded regex is valid")
});

/// Remove all tags, keeping the text between them untouched.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Count whitespace-separated words in the tag-stripped text of `html`.
pub fn word_count(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

/// Remove `<a ...>` and `</a>` tags but keep their inner text.
///
/// Comparing `strip_anchor_tags(output)` with `strip_anchor_tags(input)` shows
/// whether linking changed anything besides the anchors.
pub fn strip_anchor_tags(html: &str) -> String {
    ANCHOR_TAG_RE.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_tags() {
        let html = "<h1>Title here</h1>\n<p>One <strong>two</strong> three</p>";
        assert_eq!(word_count(html), 5);
    }

    #[test]
    fn test_strip_anchor_tags_keeps_abbr() {
        let html = r#"<p><abbr>SEO</abbr> <a href="/x">link</a></p>"#;
        assert_eq!(strip_anchor_tags(html), "<p><abbr>SEO</abbr> link</p>");
    }
}
