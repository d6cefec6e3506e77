//! Fuzzy anchor fallback: slide a window of 1..=N words over the text and keep
//! the span most similar to the title.

use crate::utils::string_utils::trim_punctuation;

/// Byte spans of whitespace-separated tokens.
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

/// Similarity in `[0, 1]` between a candidate span and the title.
///
/// Normalized Levenshtein over lowercased, whitespace-collapsed text.
pub fn similarity(span: &str, title: &str) -> f64 {
    let span = span.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let title = title.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    strsim::normalized_levenshtein(&span, &title)
}

/// Most title-like window whose similarity exceeds `threshold`.
///
/// Earlier windows win ties. The result is a slice of `text` with edge
/// punctuation trimmed.
pub fn best_window<'t>(text: &'t str, title: &str, max_words: usize, threshold: f64) -> Option<&'t str> {
    if title.trim().is_empty() {
        return None;
    }

    let spans = token_spans(text);
    let mut best: Option<(f64, &'t str)> = None;

    for i in 0..spans.len() {
        for len in 1..=max_words.min(spans.len() - i) {
            let window = trim_punctuation(&text[spans[i].0..spans[i + len - 1].1]);
            if window.is_empty() {
                continue;
            }
            let ratio = similarity(window, title);
            if ratio > threshold && best.is_none_or(|(r, _)| ratio > r) {
                best = Some((ratio, window));
            }
        }
    }

    best.map(|(_, window)| window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_spans() {
        let text = "  one two\nthree ";
        let spans = token_spans(text);
        let words: Vec<_> = spans.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_window_is_slice_of_text() {
        let text = "buy  Garden\ntool now";
        let found = best_window(text, "garden tools", 5, 0.6).unwrap();
        assert_eq!(found, "Garden\ntool");
        assert!(text.contains(found));
    }

    #[test]
    fn test_below_threshold() {
        assert_eq!(best_window("completely different", "garden tools", 5, 0.6), None);
    }

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("Garden  Tools", "garden tools"), 1.0);
    }
}
