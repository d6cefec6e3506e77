//! Linker configuration
//!
//! This module contains the tunables of the linking pass (budget, thresholds,
//! multipliers) and the lookup tables it consumes. Values can come from
//! [`Default`], the [`LinkerConfigBuilder`], or a JSON file.

pub mod tables;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use tables::LinkingTables;

use crate::errors::{LinkerError, LinkerResult};
use crate::utils::{
    DEFAULT_CATEGORY_BOOST, DEFAULT_FUZZY_THRESHOLD, DEFAULT_MAX_ANCHOR_WORDS,
    DEFAULT_MAX_WORDS_PER_LINK, DEFAULT_MIN_SCORE, DEFAULT_MIN_WORDS_PER_LINK,
    DEFAULT_OVERREPRESENTATION_DIVISOR, DEFAULT_OVERREPRESENTATION_PENALTY, STRICT_MIN_SCORE,
};

/// Range of article words that "pays for" one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsPerLink {
    pub min: usize,
    pub max: usize,
}

impl WordsPerLink {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }

    pub fn validate(&self) -> LinkerResult<()> {
        if self.min == 0 || self.min > self.max {
            return Err(LinkerError::InvalidWordsPerLink {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for WordsPerLink {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS_PER_LINK, DEFAULT_MAX_WORDS_PER_LINK)
    }
}

/// Configuration for the internal linker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
    /// Words-per-link range used to derive the link budget
    pub words_per_link: WordsPerLink,

    /// Explicit link budget; overrides the word-count derivation
    pub max_links: Option<usize>,

    /// Candidates at or below this score (after multipliers) are discarded
    pub min_score: f64,

    /// Multiplier for `category` (taxonomy) entries
    pub category_boost: f64,

    /// Multiplier applied to over-represented categories
    pub overrepresentation_penalty: f64,

    /// A category is over-represented when its count exceeds
    /// `remaining_slots / overrepresentation_divisor`
    pub overrepresentation_divisor: f64,

    /// Minimum similarity for fuzzy anchors, exclusive
    pub fuzzy_threshold: f64,

    /// Longest anchor window in words for the fuzzy fallback
    pub max_anchor_words: usize,

    /// Refill the budget from the next-best candidates when a selected
    /// candidate yields no anchor or cannot be injected
    pub refill_on_anchor_miss: bool,

    pub tables: LinkingTables,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            words_per_link: WordsPerLink::default(),
            max_links: None,
            min_score: DEFAULT_MIN_SCORE,
            category_boost: DEFAULT_CATEGORY_BOOST,
            overrepresentation_penalty: DEFAULT_OVERREPRESENTATION_PENALTY,
            overrepresentation_divisor: DEFAULT_OVERREPRESENTATION_DIVISOR,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_anchor_words: DEFAULT_MAX_ANCHOR_WORDS,
            refill_on_anchor_miss: false,
            tables: LinkingTables::default(),
        }
    }
}

impl LinkerConfig {
    pub fn builder() -> LinkerConfigBuilder {
        LinkerConfigBuilder::default()
    }

    /// The stricter variant: 0.3 threshold, everything else default
    pub fn strict() -> Self {
        Self {
            min_score: STRICT_MIN_SCORE,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> LinkerResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> LinkerResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the planner cannot work with
    pub fn validate(&self) -> LinkerResult<()> {
        self.words_per_link.validate()?;

        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(LinkerError::invalid("min_score", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(LinkerError::invalid("fuzzy_threshold", "must be within [0, 1]"));
        }
        if !(self.category_boost.is_finite() && self.category_boost > 0.0) {
            return Err(LinkerError::invalid("category_boost", "must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.overrepresentation_penalty) {
            return Err(LinkerError::invalid(
                "overrepresentation_penalty",
                "must be within [0, 1]",
            ));
        }
        if !(self.overrepresentation_divisor.is_finite() && self.overrepresentation_divisor > 0.0) {
            return Err(LinkerError::invalid(
                "overrepresentation_divisor",
                "must be a positive number",
            ));
        }
        if self.max_anchor_words == 0 {
            return Err(LinkerError::invalid("max_anchor_words", "must be at least 1"));
        }

        Ok(())
    }
}

/// Builder for [`LinkerConfig`]; `build()` validates.
#[derive(Debug, Clone, Default)]
pub struct LinkerConfigBuilder {
    config: LinkerConfig,
}

impl LinkerConfigBuilder {
    pub fn words_per_link(mut self, min: usize, max: usize) -> Self {
        self.config.words_per_link = WordsPerLink::new(min, max);
        self
    }

    pub fn max_links(mut self, max_links: Option<usize>) -> Self {
        self.config.max_links = max_links;
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.config.min_score = min_score;
        self
    }

    pub fn category_boost(mut self, boost: f64) -> Self {
        self.config.category_boost = boost;
        self
    }

    pub fn fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.config.fuzzy_threshold = threshold;
        self
    }

    pub fn refill_on_anchor_miss(mut self, refill: bool) -> Self {
        self.config.refill_on_anchor_miss = refill;
        self
    }

    pub fn tables(mut self, tables: LinkingTables) -> Self {
        self.config.tables = tables;
        self
    }

    pub fn build(self) -> LinkerResult<LinkerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LinkerConfig::default();
        assert_eq!(config.words_per_link, WordsPerLink::new(300, 400));
        assert_eq!(config.words_per_link.average(), 350.0);
        assert_eq!(config.min_score, 0.15);
        assert!(!config.refill_on_anchor_miss);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_preset() {
        assert_eq!(LinkerConfig::strict().min_score, 0.3);
    }

    #[test]
    fn test_builder_rejects_inverted_range() {
        let err = LinkerConfig::builder().words_per_link(400, 300).build().unwrap_err();
        assert!(matches!(err, LinkerError::InvalidWordsPerLink { min: 400, max: 300 }));
    }

    #[test]
    fn test_builder_rejects_zero_min() {
        assert!(LinkerConfig::builder().words_per_link(0, 10).build().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LinkerConfig::from_json_str(r#"{ "min_score": 0.3, "max_links": 4 }"#).unwrap();
        assert_eq!(config.min_score, 0.3);
        assert_eq!(config.max_links, Some(4));
        assert_eq!(config.words_per_link, WordsPerLink::default());
        assert!(!config.tables.semantic_clusters.is_empty());
    }

    #[test]
    fn test_json_rejects_bad_threshold() {
        let err = LinkerConfig::from_json_str(r#"{ "min_score": 1.5 }"#).unwrap_err();
        assert!(matches!(err, LinkerError::InvalidConfig { field: "min_score", .. }));
    }
}
