use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of URL categories used for classification and link balancing.
///
/// Variant order is priority order: taxonomy pages first, articles last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlCategory {
    /// Taxonomy / listing pages (`/category/`, `/shop/`, `/دسته/`)
    Category,
    /// Single product pages
    Product,
    /// Blog posts and articles
    Blog,
    /// Anything else
    Other,
}

impl UrlCategory {
    /// All categories in priority order
    pub const ALL: [UrlCategory; 4] = [
        UrlCategory::Category,
        UrlCategory::Product,
        UrlCategory::Blog,
        UrlCategory::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UrlCategory::Category => "category",
            UrlCategory::Product => "product",
            UrlCategory::Blog => "blog",
            UrlCategory::Other => "other",
        }
    }
}

impl fmt::Display for UrlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category counters, indexed by [`UrlCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([usize; 4]);

impl CategoryCounts {
    #[inline]
    fn slot(category: UrlCategory) -> usize {
        match category {
            UrlCategory::Category => 0,
            UrlCategory::Product => 1,
            UrlCategory::Blog => 2,
            UrlCategory::Other => 3,
        }
    }

    #[must_use]
    pub fn get(&self, category: UrlCategory) -> usize {
        self.0[Self::slot(category)]
    }

    pub fn increment(&mut self, category: UrlCategory) {
        self.0[Self::slot(category)] += 1;
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Non-zero counts in priority order
    pub fn iter(&self) -> impl Iterator<Item = (UrlCategory, usize)> + '_ {
        UrlCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&UrlCategory::Category).unwrap();
        assert_eq!(json, "\"category\"");
        let back: UrlCategory = serde_json::from_str("\"blog\"").unwrap();
        assert_eq!(back, UrlCategory::Blog);
    }

    #[test]
    fn test_counts() {
        let mut counts = CategoryCounts::default();
        counts.increment(UrlCategory::Blog);
        counts.increment(UrlCategory::Blog);
        counts.increment(UrlCategory::Category);
        assert_eq!(counts.get(UrlCategory::Blog), 2);
        assert_eq!(counts.total(), 3);
        let listed: Vec<_> = counts.iter().collect();
        assert_eq!(listed, vec![(UrlCategory::Category, 1), (UrlCategory::Blog, 2)]);
    }
}
