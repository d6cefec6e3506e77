use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::category::UrlCategory;
use crate::utils::string_utils::is_significant;
use crate::utils::url_utils::decoded_path;

static PAGE_EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:html|htm|php|aspx?)$").expect("PAGE_EXTENSION_RE: hardcoded regex is valid")
});

/// One sitemap URL annotated with metadata derived from the URL string itself.
///
/// Built once per input URL and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlCatalogEntry {
    url: String,
    category: UrlCategory,
    title: String,
    keywords: Vec<String>,
    /// Lowercased decoded path, used for path/content alignment scoring
    #[serde(skip)]
    path_lower: String,
    #[serde(skip)]
    title_lower: String,
}

impl UrlCatalogEntry {
    pub fn new(url: impl Into<String>, category: UrlCategory) -> Self {
        let url = url.into();
        let path = decoded_path(&url);
        let title = derive_title(&path).unwrap_or_else(|| url.clone());
        let keywords = derive_keywords(&path);

        Self {
            path_lower: path.to_lowercase(),
            title_lower: title.to_lowercase(),
            url,
            category,
            title,
            keywords,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> UrlCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub(crate) fn title_lower(&self) -> &str {
        &self.title_lower
    }

    pub(crate) fn path_lower(&self) -> &str {
        &self.path_lower
    }

    /// Title words in order, original casing.
    pub fn title_words(&self) -> impl Iterator<Item = &str> {
        self.title.split_whitespace()
    }
}

/// Last non-empty path segment, extension stripped, `-`/`_` turned into spaces.
fn derive_title(path: &str) -> Option<String> {
    let last = path.split('/').rfind(|s| !s.trim().is_empty())?;
    let stem = PAGE_EXTENSION_RE.replace(last, "");
    let title = stem.replace(['-', '_'], " ");
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Path pieces split on `/`, `-`, `_`; short pieces dropped, order and
/// duplicates kept.
fn derive_keywords(path: &str) -> Vec<String> {
    path.split(['/', '-', '_'])
        .map(str::trim)
        .filter(|k| is_significant(k))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_last_segment() {
        let e = UrlCatalogEntry::new("https://x.com/blog/garden-tools_guide.html", UrlCategory::Blog);
        assert_eq!(e.title(), "garden tools guide");
        assert_eq!(e.keywords(), ["blog", "garden", "tools", "guide.html"]);
    }

    #[test]
    fn test_percent_encoded_persian_title() {
        let url = format!("https://x.com/category/{}/", urlencoding::encode("کود-گیاه"));
        let e = UrlCatalogEntry::new(url, UrlCategory::Category);
        assert_eq!(e.title(), "کود گیاه");
        assert_eq!(e.keywords(), ["category", "کود", "گیاه"]);
    }

    #[test]
    fn test_root_url_title_falls_back_to_url() {
        let e = UrlCatalogEntry::new("https://x.com/", UrlCategory::Other);
        assert_eq!(e.title(), "https://x.com/");
        assert!(e.keywords().is_empty());
    }

    #[test]
    fn test_short_keywords_dropped_duplicates_kept() {
        let e = UrlCatalogEntry::new("https://x.com/p/pot/pot-xl", UrlCategory::Product);
        assert_eq!(e.keywords(), ["pot", "pot"]);
        assert_eq!(e.title(), "pot xl");
    }
}
