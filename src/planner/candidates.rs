use crate::catalog::{UrlCatalog, UrlCatalogEntry, UrlCategory};
use crate::scoring::RelevanceScorer;
use crate::segmenter::ContentSegment;

use super::{PlacementState, PlannerSettings};

/// A scored (segment, URL) pairing. Never mutated once generated.
#[derive(Debug, Clone)]
pub struct LinkCandidate<'c> {
    pub segment_index: usize,
    pub url_entry: &'c UrlCatalogEntry,
    /// Lexical relevance before category multipliers
    pub relevance: f64,
    /// Relevance after the category boost, capped at 1.0
    pub score: f64,
}

impl LinkCandidate<'_> {
    pub fn url(&self) -> &str {
        self.url_entry.url()
    }

    pub fn category(&self) -> UrlCategory {
        self.url_entry.category()
    }
}

/// Score every linkable segment against every catalog entry that is still
/// available, keeping pairs above the threshold.
///
/// Candidates come out grouped by segment, and within a segment in catalog
/// priority order (taxonomy pages first).
pub(crate) fn generate<'c>(
    settings: &PlannerSettings,
    scorer: &RelevanceScorer,
    segments: &[ContentSegment],
    catalog: &'c UrlCatalog,
    state: &PlacementState,
) -> Vec<LinkCandidate<'c>> {
    let entries = catalog.prioritized();
    let mut candidates = Vec::new();

    for segment in segments.iter().filter(|s| !s.is_heading()) {
        if state.segment_used(segment.index) {
            continue;
        }
        let text = segment.text().to_lowercase();
        if text.trim().is_empty() {
            continue;
        }

        for entry in &entries {
            if state.url_used(entry.url()) || state.is_rejected(segment.index, entry.url()) {
                continue;
            }

            let relevance = scorer.score(&text, entry);
            let boosted = match entry.category() {
                UrlCategory::Category => relevance * settings.category_boost,
                _ => relevance,
            };
            let score = boosted.min(1.0);

            if score > settings.min_score {
                candidates.push(LinkCandidate {
                    segment_index: segment.index,
                    url_entry: entry,
                    relevance,
                    score,
                });
            }
        }
    }

    candidates
}
