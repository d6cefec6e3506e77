//! Property tests for the linking pass

use proptest::prelude::*;
use std::collections::HashSet;

use kodegen_tools_interlink::utils::strip_anchor_tags;
use kodegen_tools_interlink::{InternalLinker, LinkerConfig, UrlCategorizer};

mod common;
use common::{GARDEN_SITEMAP, headings, links};

const VOCABULARY: &[&str] = &[
    "pots", "soil", "garden", "tools", "orchid", "fertilizer", "watering", "guide", "the", "and",
    "clay", "compost", "گلدان", "خاک", "کود", "سفالی", "برای", "Pots", "Garden", "tools,",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..25).prop_map(|words| words.join(" "))
}

fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        sentence().prop_map(|s| format!("<h2>{s}</h2>")),
        sentence().prop_map(|s| format!("<p>{s}</p>")),
        sentence().prop_map(|s| format!("<p>{s} <strong>{s}</strong></p>")),
        (sentence(), sentence()).prop_map(|(a, b)| format!("<ul><li>{a}</li><li>{b}</li></ul>")),
        sentence().prop_map(|s| format!("<div><h3>{s}</h3>{s}</div>")),
        sentence(),
    ]
}

fn article() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 1..12).prop_map(|blocks| blocks.join("\n"))
}

fn any_url() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(GARDEN_SITEMAP).prop_map(str::to_string),
        "[a-z/%-]{0,40}".prop_map(|path| format!("https://x.com/{path}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn categorization_is_deterministic(url in any_url()) {
        let categorizer = UrlCategorizer::default();
        let first = categorizer.categorize(&url);
        prop_assert_eq!(first, categorizer.categorize(&url));
        prop_assert_eq!(first, UrlCategorizer::default().categorize(&url));
    }

    #[test]
    fn linking_invariants_hold(html in article(), max_links in 0usize..6, refill in any::<bool>()) {
        let config = LinkerConfig::builder().refill_on_anchor_miss(refill).build().unwrap();
        let linker = InternalLinker::new(GARDEN_SITEMAP, config).unwrap();
        let report = linker.add_internal_links(&html, Some(max_links));
        let found = links(&report.html);

        // no heading links
        for heading in headings(&report.html) {
            prop_assert!(!heading.contains("<a "), "link inside heading: {}", heading);
        }

        // no duplicate destinations
        let unique: HashSet<_> = found.iter().map(|(href, _)| href.as_str()).collect();
        prop_assert_eq!(unique.len(), found.len());

        // budget respected
        prop_assert!(found.len() <= max_links);
        prop_assert_eq!(found.len(), report.stats.injected());

        // structural preservation
        prop_assert_eq!(strip_anchor_tags(&report.html), strip_anchor_tags(&html));
    }
}
