//! Per-article run report.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::anchor::AnchorStrategy;
use crate::catalog::{CategoryCounts, UrlCategory};

/// One link that made it into the output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InjectedLink {
    pub url: String,
    pub anchor: String,
    pub category: UrlCategory,
    pub segment_index: usize,
    pub score: f64,
    pub strategy: AnchorStrategy,
}

/// Counters for one `add_internal_links` call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkRunStatistics {
    pub word_count: usize,
    /// Link budget in force for this article
    pub max_links: usize,
    pub segment_count: usize,
    /// Candidates above threshold in the first planning round
    pub candidate_count: usize,
    pub injected_by_category: BTreeMap<UrlCategory, usize>,
    /// Injected links in document order
    pub links: Vec<InjectedLink>,
    /// Selected candidates with no usable anchor text
    pub anchor_misses: usize,
    /// Selected candidates whose anchor had no eligible occurrence in the markup
    pub injection_misses: usize,
    /// Selected candidates whose segment already links to the destination
    pub destination_present: usize,
}

impl LinkRunStatistics {
    #[must_use]
    pub fn injected(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn record_distribution(&mut self, distribution: &CategoryCounts) {
        self.injected_by_category = distribution.iter().collect();
    }
}

/// Output of one linking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkingReport {
    pub html: String,
    pub stats: LinkRunStatistics,
}

impl LinkingReport {
    pub(crate) fn unchanged(html: &str, stats: LinkRunStatistics) -> Self {
        Self {
            html: html.to_string(),
            stats,
        }
    }

    pub fn into_html(self) -> String {
        self.html
    }
}
