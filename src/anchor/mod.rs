//! Anchor text selection.
//!
//! For a chosen (segment, URL) pair, finds a literal span of the segment text
//! to turn into the link. Strategies run in order and the first hit wins:
//!
//! 1. the full title;
//! 2. the first 2, then 3, title words as a phrase;
//! 3. a semantic anchor noun from the title (optionally with the next title word);
//! 4. the longest keyword present in the text;
//! 5. the first 4, then 5, title words as a phrase;
//! 6. the most title-like window of 1..=5 words ([`fuzzy`]).
//!
//! The returned string is always a slice of the segment text, so it can be
//! found again in the segment markup.

pub mod fuzzy;

use std::collections::HashSet;

use crate::catalog::UrlCatalogEntry;
use crate::config::LinkerConfig;
use crate::utils::string_utils::{find_case_insensitive, find_word_case_insensitive, is_significant};

/// Which strategy produced an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStrategy {
    ExactTitle,
    TitlePrefix,
    SemanticNoun,
    Keyword,
    LongTitlePrefix,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMatch {
    pub text: String,
    pub strategy: AnchorStrategy,
}

#[derive(Debug, Clone)]
pub struct AnchorTextSelector {
    anchor_nouns: HashSet<String>,
    fuzzy_threshold: f64,
    max_window: usize,
}

impl AnchorTextSelector {
    pub fn new(anchor_nouns: &[String], fuzzy_threshold: f64, max_window: usize) -> Self {
        Self {
            anchor_nouns: anchor_nouns.iter().map(|n| n.to_lowercase()).collect(),
            fuzzy_threshold,
            max_window,
        }
    }

    /// Best anchor span inside `segment_text` for `entry`, if any.
    pub fn select_anchor(&self, segment_text: &str, entry: &UrlCatalogEntry) -> Option<AnchorMatch> {
        if segment_text.trim().is_empty() {
            return None;
        }
        let hit = |text: &str, strategy| {
            Some(AnchorMatch {
                text: text.to_string(),
                strategy,
            })
        };

        let title = entry.title().trim();
        if let Some(found) = find_case_insensitive(segment_text, title) {
            return hit(found, AnchorStrategy::ExactTitle);
        }

        let words: Vec<&str> = entry.title_words().collect();

        for n in [2, 3] {
            if let Some(found) = self.title_prefix(segment_text, &words, n) {
                return hit(found, AnchorStrategy::TitlePrefix);
            }
        }

        if let Some(found) = self.semantic_anchor(segment_text, &words) {
            return hit(found, AnchorStrategy::SemanticNoun);
        }

        if let Some(found) = longest_keyword(segment_text, entry.keywords()) {
            return hit(found, AnchorStrategy::Keyword);
        }

        for n in [4, 5] {
            if let Some(found) = self.title_prefix(segment_text, &words, n) {
                return hit(found, AnchorStrategy::LongTitlePrefix);
            }
        }

        fuzzy::best_window(segment_text, title, self.max_window, self.fuzzy_threshold)
            .and_then(|found| hit(found, AnchorStrategy::Fuzzy))
    }

    /// First `n` title words as a phrase; only when the title is longer than
    /// `n` words, otherwise the phrase is the title itself.
    fn title_prefix<'t>(&self, text: &'t str, words: &[&str], n: usize) -> Option<&'t str> {
        if words.len() <= n {
            return None;
        }
        find_word_case_insensitive(text, &words[..n].join(" "))
    }

    fn semantic_anchor<'t>(&self, text: &'t str, words: &[&str]) -> Option<&'t str> {
        for (i, word) in words.iter().enumerate() {
            if !self.anchor_nouns.contains(&word.to_lowercase()) {
                continue;
            }
            let Some(found) = find_word_case_insensitive(text, word) else {
                continue;
            };
            if let Some(next) = words.get(i + 1) {
                let pair = format!("{word} {next}");
                if let Some(pair_found) = find_word_case_insensitive(text, &pair) {
                    return Some(pair_found);
                }
            }
            return Some(found);
        }
        None
    }
}

impl From<&LinkerConfig> for AnchorTextSelector {
    fn from(config: &LinkerConfig) -> Self {
        Self::new(
            &config.tables.anchor_nouns,
            config.fuzzy_threshold,
            config.max_anchor_words,
        )
    }
}

/// Longest keyword (by characters) present in the text; earlier keywords win ties.
fn longest_keyword<'t>(text: &'t str, keywords: &[String]) -> Option<&'t str> {
    let mut best: Option<(usize, &'t str)> = None;
    for keyword in keywords.iter().filter(|k| is_significant(k)) {
        let Some(found) = find_word_case_insensitive(text, keyword) else {
            continue;
        };
        let len = keyword.chars().count();
        if best.is_none_or(|(best_len, _)| len > best_len) {
            best = Some((len, found));
        }
    }
    best.map(|(_, found)| found)
}
