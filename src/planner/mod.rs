//! Link budget and placement planning.
//!
//! The planner turns an article's word count into a link budget, scores every
//! linkable segment against the catalog, and picks a spread-out subset of
//! (segment, URL) pairs:
//!
//! - taxonomy (`category`) pages get a priority boost;
//! - a category that already holds more than `remaining / 3` links is penalised;
//! - no URL is used twice and no segment receives two links;
//! - headings never produce candidates.

pub mod budget;
pub mod candidates;
pub mod selection;

use std::collections::HashSet;

pub use budget::link_budget;
pub use candidates::LinkCandidate;

use crate::catalog::{CategoryCounts, UrlCatalog, UrlCategory};
use crate::config::LinkerConfig;
use crate::scoring::RelevanceScorer;
use crate::segmenter::ContentSegment;

/// Numeric knobs of the planner, taken from [`LinkerConfig`]
#[derive(Debug, Clone, Copy)]
pub struct PlannerSettings {
    pub min_score: f64,
    pub category_boost: f64,
    pub overrepresentation_penalty: f64,
    pub overrepresentation_divisor: f64,
}

impl From<&LinkerConfig> for PlannerSettings {
    fn from(config: &LinkerConfig) -> Self {
        Self {
            min_score: config.min_score,
            category_boost: config.category_boost,
            overrepresentation_penalty: config.overrepresentation_penalty,
            overrepresentation_divisor: config.overrepresentation_divisor,
        }
    }
}

/// Link placement state, scoped to a single article.
#[derive(Debug, Clone, Default)]
pub struct PlacementState {
    used_urls: HashSet<String>,
    used_segments: HashSet<usize>,
    rejected: HashSet<(usize, String)>,
    pub(crate) distribution: CategoryCounts,
}

impl PlacementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_used(&self, url: &str) -> bool {
        self.used_urls.contains(url)
    }

    pub fn segment_used(&self, segment_index: usize) -> bool {
        self.used_segments.contains(&segment_index)
    }

    pub fn is_rejected(&self, segment_index: usize, url: &str) -> bool {
        self.rejected.contains(&(segment_index, url.to_string()))
    }

    /// Record a link that was actually injected
    pub fn commit(&mut self, segment_index: usize, url: &str, category: UrlCategory) {
        self.used_urls.insert(url.to_string());
        self.used_segments.insert(segment_index);
        self.distribution.increment(category);
    }

    /// Record a pairing that produced no link, so a refill round skips it
    pub fn reject(&mut self, segment_index: usize, url: &str) {
        self.rejected.insert((segment_index, url.to_string()));
    }

    pub fn distribution(&self) -> &CategoryCounts {
        &self.distribution
    }

    pub fn links_placed(&self) -> usize {
        self.used_urls.len()
    }
}

/// Candidate generation and selection over one article.
#[derive(Debug, Clone)]
pub struct LinkBudgetPlanner {
    settings: PlannerSettings,
}

impl LinkBudgetPlanner {
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    /// Scored candidates for every linkable segment that is still free.
    pub fn plan<'c>(
        &self,
        scorer: &RelevanceScorer,
        segments: &[ContentSegment],
        catalog: &'c UrlCatalog,
        state: &PlacementState,
    ) -> Vec<LinkCandidate<'c>> {
        candidates::generate(&self.settings, scorer, segments, catalog, state)
    }

    /// Evenly spread subset of `candidates`, at most `max_links` long,
    /// ordered by segment index.
    pub fn select<'c>(
        &self,
        candidates: &[LinkCandidate<'c>],
        max_links: usize,
        segment_count: usize,
        state: &PlacementState,
    ) -> Vec<LinkCandidate<'c>> {
        selection::select(&self.settings, candidates, max_links, segment_count, state)
    }
}

impl From<&LinkerConfig> for LinkBudgetPlanner {
    fn from(config: &LinkerConfig) -> Self {
        Self::new(PlannerSettings::from(config))
    }
}
