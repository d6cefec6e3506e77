//! Path-pattern URL classification.
//!
//! Patterns are plain path substrings checked in fixed priority order
//! (category, product, blog). The first match wins; there is no scoring.

use serde::{Deserialize, Serialize};

use super::category::UrlCategory;
use crate::utils::url_utils::percent_decode;

/// Bilingual (English/Persian) path patterns for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    pub category: Vec<String>,
    pub product: Vec<String>,
    pub blog: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        fn owned(patterns: &[&str]) -> Vec<String> {
            patterns.iter().map(|p| (*p).to_string()).collect()
        }

        Self {
            category: owned(&[
                "/category/",
                "/cat/",
                "/categories/",
                "/دسته/",
                "/دسته-بندی/",
                "/product-category/",
                "/shop/",
            ]),
            product: owned(&["/product/", "/محصول/", "/p/"]),
            blog: owned(&["/blog/", "/post/", "/article/", "/مقاله/", "/وبلاگ/"]),
        }
    }
}

/// Classifies raw URL strings into a [`UrlCategory`].
#[derive(Debug, Clone)]
pub struct UrlCategorizer {
    /// Lowercased patterns in priority order
    ordered: Vec<(UrlCategory, Vec<String>)>,
}

impl UrlCategorizer {
    pub fn new(rules: &CategoryRules) -> Self {
        let lower = |patterns: &[String]| -> Vec<String> {
            patterns
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .collect()
        };

        Self {
            ordered: vec![
                (UrlCategory::Category, lower(&rules.category)),
                (UrlCategory::Product, lower(&rules.product)),
                (UrlCategory::Blog, lower(&rules.blog)),
            ],
        }
    }

    /// Classify `url`. Case-insensitive; percent-encoded Persian paths are
    /// matched as well as their decoded form.
    #[must_use]
    pub fn categorize(&self, url: &str) -> UrlCategory {
        let raw = url.to_lowercase();
        let decoded = percent_decode(&raw).to_lowercase();

        for (category, patterns) in &self.ordered {
            if patterns
                .iter()
                .any(|p| raw.contains(p.as_str()) || decoded.contains(p.as_str()))
            {
                return *category;
            }
        }

        UrlCategory::Other
    }
}

impl Default for UrlCategorizer {
    fn default() -> Self {
        Self::new(&CategoryRules::default())
    }
}
