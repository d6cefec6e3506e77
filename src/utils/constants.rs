//! Shared configuration constants for interlink
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default lower bound of the words-per-link range: 300 words
///
/// Together with [`DEFAULT_MAX_WORDS_PER_LINK`] this yields one link per
/// ~350 words of article text, which keeps link density readable:
/// - 900 words: 2 links
/// - 1500 words: 4 links
pub const DEFAULT_MIN_WORDS_PER_LINK: usize = 300;

/// Default upper bound of the words-per-link range: 400 words
pub const DEFAULT_MAX_WORDS_PER_LINK: usize = 400;

/// Minimum candidate score: 0.15
///
/// Candidates scoring at or below this value are discarded. The stricter
/// variant uses [`STRICT_MIN_SCORE`] and produces noticeably fewer links on
/// short articles.
pub const DEFAULT_MIN_SCORE: f64 = 0.15;

/// Stricter candidate threshold used by `LinkerConfig::strict()`
pub const STRICT_MIN_SCORE: f64 = 0.3;

/// Priority multiplier applied to taxonomy (`category`) pages
pub const DEFAULT_CATEGORY_BOOST: f64 = 1.5;

/// Multiplier applied when a category already holds too many links
pub const DEFAULT_OVERREPRESENTATION_PENALTY: f64 = 0.5;

/// A category is over-represented once its running count exceeds
/// `remaining_slots / DEFAULT_OVERREPRESENTATION_DIVISOR`
pub const DEFAULT_OVERREPRESENTATION_DIVISOR: f64 = 3.0;

/// Minimum similarity ratio for the fuzzy anchor fallback
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Longest anchor window (in words) considered by the fuzzy fallback
///
/// Five words is roughly the five-syllable ceiling used for Persian anchors.
pub const DEFAULT_MAX_ANCHOR_WORDS: usize = 5;

/// Number of sample URLs kept per category in catalog statistics
pub const SAMPLE_URLS_PER_CATEGORY: usize = 3;

/// Words (and keywords) must be longer than this many characters to count
pub const MIN_TOKEN_CHARS: usize = 2;
