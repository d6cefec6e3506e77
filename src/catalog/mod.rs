//! URL catalogue built from a flat sitemap URL list.
//!
//! Each URL becomes a [`UrlCatalogEntry`] with a title, keyword tokens and a
//! [`UrlCategory`]. The catalog is read-only after construction and can be
//! shared across threads linking different articles.

pub mod categorizer;
pub mod category;
pub mod entry;
pub mod stats;

use std::collections::HashSet;

pub use categorizer::{CategoryRules, UrlCategorizer};
pub use category::{CategoryCounts, UrlCategory};
pub use entry::UrlCatalogEntry;
pub use stats::{CatalogStatistics, SampleUrl};

use crate::utils::is_valid_url;

/// Ordered collection of catalog entries, unique by URL.
#[derive(Debug, Clone, Default)]
pub struct UrlCatalog {
    entries: Vec<UrlCatalogEntry>,
}

impl UrlCatalog {
    /// Build the catalog from raw URL strings.
    ///
    /// Blank lines are ignored and repeated URLs keep their first position.
    pub fn from_urls<I, S>(urls: I, categorizer: &UrlCategorizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for url in urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            if !seen.insert(url.to_string()) {
                log::debug!("Skipping duplicate catalog URL: {url}");
                continue;
            }
            if !is_valid_url(url) {
                log::debug!("Catalog URL is not absolute http(s), keeping as-is: {url}");
            }
            entries.push(UrlCatalogEntry::new(url, categorizer.categorize(url)));
        }

        let catalog = Self { entries };
        let stats = catalog.statistics();
        log::info!("URL catalog built with {} URLs", stats.total_urls);
        for (category, count) in &stats.by_category {
            log::info!("  - {category}: {count}");
        }

        catalog
    }

    pub fn entries(&self) -> &[UrlCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UrlCatalogEntry> {
        self.entries.get(index)
    }

    /// Entries sorted by category priority, keeping input order within a category
    pub fn prioritized(&self) -> Vec<&UrlCatalogEntry> {
        let mut ordered: Vec<&UrlCatalogEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.category());
        ordered
    }

    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::collect(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_urls_dedupes_and_skips_blank() {
        let urls = [
            "https://x.com/blog/a-post/",
            "",
            "https://x.com/shop/pots/",
            "https://x.com/blog/a-post/",
        ];
        let catalog = UrlCatalog::from_urls(urls, &UrlCategorizer::default());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].url(), "https://x.com/blog/a-post/");
    }

    #[test]
    fn test_prioritized_order() {
        let urls = [
            "https://x.com/blog/one/",
            "https://x.com/about/",
            "https://x.com/product/two/",
            "https://x.com/category/three/",
        ];
        let catalog = UrlCatalog::from_urls(urls, &UrlCategorizer::default());
        let cats: Vec<_> = catalog.prioritized().iter().map(|e| e.category()).collect();
        assert_eq!(
            cats,
            vec![
                UrlCategory::Category,
                UrlCategory::Product,
                UrlCategory::Blog,
                UrlCategory::Other
            ]
        );
    }

    #[test]
    fn test_statistics_samples_capped() {
        let urls: Vec<String> = (0..5).map(|i| format!("https://x.com/blog/post-{i}/")).collect();
        let catalog = UrlCatalog::from_urls(&urls, &UrlCategorizer::default());
        let stats = catalog.statistics();
        assert_eq!(stats.total_urls, 5);
        assert_eq!(stats.count(UrlCategory::Blog), 5);
        assert_eq!(stats.count(UrlCategory::Product), 0);
        assert_eq!(stats.sample_urls[&UrlCategory::Blog].len(), 3);
        assert_eq!(stats.sample_urls[&UrlCategory::Blog][0].title, "post 0");
    }
}
