//! Rewrites one occurrence of the anchor text inside a segment as a link.
//!
//! Fails closed: the markup is only changed when the destination is not
//! already linked from the segment and an occurrence of the anchor exists
//! outside tags, outside existing `<a>` elements and outside headings.

use html_escape::encode_double_quoted_attribute;
use regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::LazyLock;

use crate::catalog::UrlCatalogEntry;
use crate::segmenter::{ANCHOR_ELEMENT_RE, NESTED_HEADING_RE};
use crate::utils::string_utils::{has_word_boundaries, safe_truncate_chars};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG_RE: hardcoded regex is valid"));

/// Why a segment was left unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionMiss {
    /// The segment already links to this URL
    DestinationPresent,
    /// No eligible occurrence of the anchor text
    AnchorNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionOutcome {
    Injected { markup: String, anchor: String },
    Unchanged(InjectionMiss),
}

impl InjectionOutcome {
    pub fn is_injected(&self) -> bool {
        matches!(self, InjectionOutcome::Injected { .. })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkInjector;

impl LinkInjector {
    pub fn new() -> Self {
        Self
    }

    /// Wrap the first eligible occurrence of `anchor_text` in a link to `entry`.
    pub fn inject(&self, segment_markup: &str, entry: &UrlCatalogEntry, anchor_text: &str) -> InjectionOutcome {
        let href = encode_double_quoted_attribute(entry.url());
        if segment_markup.contains(entry.url()) || segment_markup.contains(href.as_ref()) {
            return InjectionOutcome::Unchanged(InjectionMiss::DestinationPresent);
        }

        let anchor_text = anchor_text.trim();
        if anchor_text.is_empty() {
            return InjectionOutcome::Unchanged(InjectionMiss::AnchorNotFound);
        }
        let Ok(pattern) = RegexBuilder::new(&regex::escape(anchor_text))
            .case_insensitive(true)
            .build()
        else {
            return InjectionOutcome::Unchanged(InjectionMiss::AnchorNotFound);
        };

        let protected = protected_ranges(segment_markup);
        let eligible = pattern.find_iter(segment_markup).find(|m| {
            !protected.iter().any(|r| r.start < m.end() && m.start() < r.end)
                && has_word_boundaries(segment_markup, m.start(), m.end())
        });

        match eligible {
            Some(m) => {
                let matched = m.as_str();
                let mut markup = String::with_capacity(segment_markup.len() + href.len() + 16);
                markup.push_str(&segment_markup[..m.start()]);
                markup.push_str("<a href=\"");
                markup.push_str(&href);
                markup.push_str("\">");
                markup.push_str(matched);
                markup.push_str("</a>");
                markup.push_str(&segment_markup[m.end()..]);
                InjectionOutcome::Injected {
                    markup,
                    anchor: matched.to_string(),
                }
            }
            None => {
                log::debug!(
                    "Anchor '{}' has no eligible occurrence for {}",
                    safe_truncate_chars(anchor_text, 60),
                    entry.url()
                );
                InjectionOutcome::Unchanged(InjectionMiss::AnchorNotFound)
            }
        }
    }
}

/// Byte ranges where a link must not start or end: tags themselves, existing
/// links, and nested headings (an unclosed one runs to the end of the markup).
fn protected_ranges(markup: &str) -> Vec<Range<usize>> {
    TAG_RE
        .find_iter(markup)
        .chain(ANCHOR_ELEMENT_RE.find_iter(markup))
        .chain(NESTED_HEADING_RE.find_iter(markup))
        .map(|m| m.range())
        .collect()
}
