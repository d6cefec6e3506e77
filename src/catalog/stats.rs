//! Catalog statistics for display by the CLI.

use serde::Serialize;
use std::collections::BTreeMap;

use super::category::UrlCategory;
use super::entry::UrlCatalogEntry;
use crate::utils::SAMPLE_URLS_PER_CATEGORY;

/// Example URL shown next to category counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleUrl {
    pub url: String,
    pub title: String,
}

/// Immutable snapshot of catalog composition
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStatistics {
    pub total_urls: usize,
    pub by_category: BTreeMap<UrlCategory, usize>,
    pub sample_urls: BTreeMap<UrlCategory, Vec<SampleUrl>>,
}

impl CatalogStatistics {
    pub(crate) fn collect<'a>(entries: impl IntoIterator<Item = &'a UrlCatalogEntry>) -> Self {
        let mut stats = Self::default();

        for entry in entries {
            stats.total_urls += 1;
            *stats.by_category.entry(entry.category()).or_default() += 1;

            let samples = stats.sample_urls.entry(entry.category()).or_default();
            if samples.len() < SAMPLE_URLS_PER_CATEGORY {
                samples.push(SampleUrl {
                    url: entry.url().to_string(),
                    title: entry.title().to_string(),
                });
            }
        }

        stats
    }

    /// Count for one category (zero when absent)
    #[must_use]
    pub fn count(&self, category: UrlCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
