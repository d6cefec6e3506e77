//! Lexical relevance between a segment's text and a catalog entry.
//!
//! Additive bonuses, capped at 1.0. No embeddings and no external calls, so
//! every score can be explained bonus by bonus through [`ScoreBreakdown`].

use serde::Serialize;

use super::semantic::SemanticCluster;
use crate::catalog::UrlCatalogEntry;
use crate::utils::string_utils::is_significant;

/// Full title appears verbatim in the text
const EXACT_TITLE_BONUS: f64 = 0.8;
/// Per title word found in the text
const TITLE_WORD_BONUS: f64 = 0.3;
/// Per keyword found verbatim in the text
const KEYWORD_BONUS: f64 = 0.4;
/// Partial credit for a multi-word keyword with at least one token present
const KEYWORD_PARTIAL_BONUS: f64 = 0.2;
/// A title word occurs in both the URL path and the text
const PATH_ALIGNMENT_BONUS: f64 = 0.2;
/// Text and title share a semantic cluster
const SEMANTIC_BONUS: f64 = 0.3;

const SCORE_MAX: f64 = 1.0;

/// Bonus-by-bonus account of a relevance score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub exact_title: f64,
    pub title_words: f64,
    pub keywords: f64,
    pub path_alignment: f64,
    pub semantic: f64,
}

impl ScoreBreakdown {
    /// Sum of all bonuses, capped at 1.0
    #[must_use]
    pub fn total(&self) -> f64 {
        let sum = self.exact_title + self.title_words + self.keywords + self.path_alignment + self.semantic;
        sum.min(SCORE_MAX)
    }
}

/// Scores segment text against catalog entries.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    clusters: Vec<SemanticCluster>,
}

impl RelevanceScorer {
    pub fn new(clusters: Vec<SemanticCluster>) -> Self {
        Self { clusters }
    }

    /// Relevance in `[0, 1]`. `text_lower` must already be lowercased.
    #[must_use]
    pub fn score(&self, text_lower: &str, entry: &UrlCatalogEntry) -> f64 {
        self.breakdown(text_lower, entry).total()
    }

    pub fn breakdown(&self, text_lower: &str, entry: &UrlCatalogEntry) -> ScoreBreakdown {
        let mut b = ScoreBreakdown::default();
        if text_lower.trim().is_empty() {
            return b;
        }

        let title = entry.title_lower();
        if !title.trim().is_empty() && text_lower.contains(title) {
            b.exact_title = EXACT_TITLE_BONUS;
        }

        let title_words: Vec<&str> = title
            .split_whitespace()
            .filter(|w| is_significant(w))
            .collect();
        let words_in_text = title_words.iter().filter(|w| text_lower.contains(**w)).count();
        b.title_words = TITLE_WORD_BONUS * words_in_text as f64;

        for keyword in entry.keywords() {
            let keyword = keyword.to_lowercase();
            if !is_significant(&keyword) {
                continue;
            }
            if text_lower.contains(keyword.as_str()) {
                b.keywords += KEYWORD_BONUS;
                continue;
            }
            let tokens: Vec<&str> = keyword.split_whitespace().collect();
            if tokens.len() > 1 && tokens.iter().any(|t| is_significant(t) && text_lower.contains(*t)) {
                b.keywords += KEYWORD_PARTIAL_BONUS;
            }
        }

        if title_words
            .iter()
            .any(|w| entry.path_lower().contains(*w) && text_lower.contains(*w))
        {
            b.path_alignment = PATH_ALIGNMENT_BONUS;
        }

        if self
            .clusters
            .iter()
            .any(|c| c.mentioned_in(text_lower) && c.mentioned_in(title))
        {
            b.semantic = SEMANTIC_BONUS;
        }

        b
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(super::semantic::default_clusters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UrlCategory;

    fn entry(url: &str) -> UrlCatalogEntry {
        UrlCatalogEntry::new(url, UrlCategory::Blog)
    }

    #[test]
    fn test_exact_title_caps_at_one() {
        let scorer = RelevanceScorer::default();
        let e = entry("https://x.com/blog/garden-tools/");
        let b = scorer.breakdown("the best garden tools for spring", &e);
        assert_eq!(b.exact_title, EXACT_TITLE_BONUS);
        assert!((b.title_words - 0.6).abs() < 1e-9);
        assert_eq!(b.path_alignment, PATH_ALIGNMENT_BONUS);
        assert_eq!(b.total(), 1.0);
    }

    #[test]
    fn test_unrelated_text_scores_zero() {
        let scorer = RelevanceScorer::default();
        let e = entry("https://x.com/blog/garden-tools/");
        assert_eq!(scorer.score("completely unrelated sentence", &e), 0.0);
        assert_eq!(scorer.score("   ", &e), 0.0);
    }

    #[test]
    fn test_semantic_bonus_without_shared_words() {
        let scorer = RelevanceScorer::default();
        let e = entry("https://x.com/blog/کود-ارگانیک/");
        let b = scorer.breakdown("تغذیه مناسب گیاه در بهار", &e);
        assert_eq!(b.exact_title, 0.0);
        assert_eq!(b.title_words, 0.0);
        assert_eq!(b.semantic, SEMANTIC_BONUS);
    }

    #[test]
    fn test_custom_clusters_injected() {
        let scorer = RelevanceScorer::new(vec![SemanticCluster::new("cars", &["engine", "motor"])]);
        let e = entry("https://x.com/blog/motor-oil/");
        let b = scorer.breakdown("keep your engine clean", &e);
        assert_eq!(b.semantic, SEMANTIC_BONUS);
    }

    #[test]
    fn test_keyword_partial_credit() {
        let e = entry("https://x.com/blog/soil%20mix/");
        let scorer = RelevanceScorer::new(vec![]);
        let b = scorer.breakdown("a good soil keeps roots healthy", &e);
        // "soil mix" is one keyword; only "soil" is present
        assert!((b.keywords - KEYWORD_PARTIAL_BONUS).abs() < 1e-9);
    }
}
