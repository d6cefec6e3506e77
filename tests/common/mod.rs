//! Test utilities shared by the interlink integration tests

use regex::Regex;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a href="([^"]*)">(.*?)</a>"#).expect("LINK_RE: hardcoded regex is valid")
});

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[1-6](?:\s[^>]*)?>.*?</h[1-6]\s*>").expect("HEADING_RE: hardcoded regex is valid")
});

/// A small mixed-category sitemap
#[allow(dead_code)]
pub const GARDEN_SITEMAP: &[&str] = &[
    "https://shop.example/category/pots/",
    "https://shop.example/product-category/soil/",
    "https://shop.example/product/orchid-fertilizer/",
    "https://shop.example/blog/garden-tools/",
    "https://shop.example/blog/watering-guide/",
    "https://shop.example/category/%DA%AF%D9%84%D8%AF%D8%A7%D9%86/",
    "https://shop.example/about-us/",
];

/// `(href, anchor text)` of every `<a href="...">` in `html`, in order
#[allow(dead_code)]
pub fn links(html: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}

/// Markup of every heading element in `html`
#[allow(dead_code)]
pub fn headings(html: &str) -> Vec<&str> {
    HEADING_RE.find_iter(html).map(|m| m.as_str()).collect()
}

/// `count` filler words, none of which relate to the sitemap
#[allow(dead_code)]
pub fn filler(count: usize) -> String {
    (0..count).map(|i| format!("lorem{i}")).collect::<Vec<_>>().join(" ")
}
