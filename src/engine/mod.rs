//! The internal linking pass.
//!
//! [`InternalLinker`] owns the read-only catalog and the configured components.
//! Each [`InternalLinker::add_internal_links`] call works on its own
//! [`PlacementState`], so one engine can link many articles, including in
//! parallel via [`InternalLinker::link_articles`].

pub mod report;

use rayon::prelude::*;
use std::collections::HashMap;

pub use report::{InjectedLink, LinkRunStatistics, LinkingReport};

use crate::anchor::AnchorTextSelector;
use crate::catalog::{CatalogStatistics, UrlCatalog, UrlCategorizer};
use crate::config::LinkerConfig;
use crate::errors::LinkerResult;
use crate::injector::{InjectionMiss, InjectionOutcome, LinkInjector};
use crate::planner::{LinkBudgetPlanner, LinkCandidate, PlacementState, link_budget};
use crate::scoring::{RelevanceScorer, ScoreBreakdown};
use crate::segmenter::{ContentSegment, segment};
use crate::sources::UrlSource;
use crate::utils::word_count;

pub struct InternalLinker {
    config: LinkerConfig,
    categorizer: UrlCategorizer,
    catalog: UrlCatalog,
    scorer: RelevanceScorer,
    planner: LinkBudgetPlanner,
    anchors: AnchorTextSelector,
    injector: LinkInjector,
}

impl InternalLinker {
    /// Build an engine over `urls`. Fails only on invalid configuration.
    pub fn new<I, S>(urls: I, config: LinkerConfig) -> LinkerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let categorizer = UrlCategorizer::new(&config.tables.category_rules);
        let catalog = UrlCatalog::from_urls(urls, &categorizer);

        Ok(Self {
            scorer: RelevanceScorer::new(config.tables.semantic_clusters.clone()),
            planner: LinkBudgetPlanner::from(&config),
            anchors: AnchorTextSelector::from(&config),
            injector: LinkInjector::new(),
            categorizer,
            catalog,
            config,
        })
    }

    pub fn from_source(source: &dyn UrlSource, config: LinkerConfig) -> LinkerResult<Self> {
        Self::new(source.urls()?, config)
    }

    pub fn config(&self) -> &LinkerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &UrlCatalog {
        &self.catalog
    }

    pub fn categorizer(&self) -> &UrlCategorizer {
        &self.categorizer
    }

    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        self.catalog.statistics()
    }

    /// Per-bonus relevance of `text` for a catalog URL, before category multipliers.
    pub fn explain(&self, text: &str, url: &str) -> Option<ScoreBreakdown> {
        let entry = self.catalog.entries().iter().find(|e| e.url() == url)?;
        Some(self.scorer.breakdown(&text.to_lowercase(), entry))
    }

    /// Insert up to the article's link budget of internal links into `html`.
    ///
    /// `max_links` overrides both the configured and the word-count budget.
    /// Never fails: every "no good link" outcome shows up only as lower counts
    /// in the returned report.
    pub fn add_internal_links(&self, html: &str, max_links: Option<usize>) -> LinkingReport {
        let mut stats = LinkRunStatistics {
            word_count: word_count(html),
            ..Default::default()
        };
        stats.max_links = link_budget(
            stats.word_count,
            self.config.words_per_link,
            max_links.or(self.config.max_links),
        );

        if self.catalog.is_empty() || stats.max_links == 0 {
            tracing::debug!(
                catalog = self.catalog.len(),
                max_links = stats.max_links,
                "Nothing to link"
            );
            return LinkingReport::unchanged(html, stats);
        }

        let segmentation = segment(html);
        let segments = segmentation.segments();
        stats.segment_count = segments.len();

        let mut state = PlacementState::new();
        let mut rewritten: HashMap<usize, String> = HashMap::new();
        let mut first_round = true;

        loop {
            let remaining = stats.max_links - state.links_placed();
            if remaining == 0 {
                break;
            }

            let candidates = self.planner.plan(&self.scorer, segments, &self.catalog, &state);
            if first_round {
                stats.candidate_count = candidates.len();
                first_round = false;
            }
            let selected = self.planner.select(&candidates, remaining, segments.len(), &state);
            if selected.is_empty() {
                break;
            }

            let mut missed = false;
            for candidate in &selected {
                let segment = &segments[candidate.segment_index];
                match self.place(segment, candidate) {
                    Ok((link, markup)) => {
                        state.commit(candidate.segment_index, candidate.url(), candidate.category());
                        rewritten.insert(candidate.segment_index, markup);
                        stats.links.push(link);
                    }
                    Err(miss) => {
                        tracing::debug!(
                            segment = candidate.segment_index,
                            url = candidate.url(),
                            ?miss,
                            "Selected candidate produced no link"
                        );
                        match miss {
                            Miss::Anchor => stats.anchor_misses += 1,
                            Miss::Injection(InjectionMiss::AnchorNotFound) => stats.injection_misses += 1,
                            Miss::Injection(InjectionMiss::DestinationPresent) => {
                                stats.destination_present += 1
                            }
                        }
                        state.reject(candidate.segment_index, candidate.url());
                        missed = true;
                    }
                }
            }

            if !(self.config.refill_on_anchor_miss && missed) {
                break;
            }
        }

        stats.links.sort_by_key(|l| l.segment_index);
        stats.record_distribution(state.distribution());

        let output = segmentation.render(|s| rewritten.remove(&s.index));

        tracing::info!(
            word_count = stats.word_count,
            max_links = stats.max_links,
            segments = stats.segment_count,
            candidates = stats.candidate_count,
            injected = stats.injected(),
            anchor_misses = stats.anchor_misses,
            injection_misses = stats.injection_misses,
            destination_present = stats.destination_present,
            "Internal linking pass complete"
        );

        LinkingReport { html: output, stats }
    }

    /// Link many articles in parallel against the shared catalog.
    pub fn link_articles(&self, articles: &[String]) -> Vec<LinkingReport> {
        articles
            .par_iter()
            .map(|html| self.add_internal_links(html, None))
            .collect()
    }

    /// Anchor selection plus injection for one selected candidate.
    fn place(
        &self,
        segment: &ContentSegment,
        candidate: &LinkCandidate<'_>,
    ) -> Result<(InjectedLink, String), Miss> {
        let entry = candidate.url_entry;
        let anchor = self
            .anchors
            .select_anchor(&segment.eligible_text(), entry)
            .ok_or(Miss::Anchor)?;

        match self.injector.inject(&segment.raw_markup, entry, &anchor.text) {
            InjectionOutcome::Injected { markup, anchor: matched } => Ok((
                InjectedLink {
                    url: entry.url().to_string(),
                    anchor: matched,
                    category: entry.category(),
                    segment_index: candidate.segment_index,
                    score: candidate.score,
                    strategy: anchor.strategy,
                },
                markup,
            )),
            InjectionOutcome::Unchanged(reason) => Err(Miss::Injection(reason)),
        }
    }
}

/// Why a selected candidate was dropped
#[derive(Debug, Clone, Copy)]
enum Miss {
    Anchor,
    Injection(InjectionMiss),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UrlCategory;

    fn linker(urls: &[&str]) -> InternalLinker {
        InternalLinker::new(urls, LinkerConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = LinkerConfig {
            words_per_link: crate::config::WordsPerLink::new(400, 300),
            ..Default::default()
        };
        let err = InternalLinker::new(["https://x.com/a/"], config).err().unwrap();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_catalog_is_noop() {
        let html = "<p>pots and soil</p>";
        let report = InternalLinker::new(Vec::<String>::new(), LinkerConfig::default())
            .unwrap()
            .add_internal_links(html, Some(3));
        assert_eq!(report.html, html);
        assert_eq!(report.stats.injected(), 0);
    }

    #[test]
    fn test_zero_budget_is_noop() {
        let html = "<p>pots</p>";
        let report = linker(&["https://x.com/category/pots/"]).add_internal_links(html, None);
        assert_eq!(report.stats.max_links, 0);
        assert_eq!(report.html, html);
    }

    #[test]
    fn test_links_and_preserves_gaps() {
        let html = "<h1>Guide</h1>\n\n<p>Choose the right pots first.</p>\n<p>Then water.</p>\n";
        let report = linker(&["https://x.com/category/pots/"]).add_internal_links(html, Some(1));
        assert_eq!(
            report.html,
            "<h1>Guide</h1>\n\n<p>Choose the right <a href=\"https://x.com/category/pots/\">pots</a> first.</p>\n<p>Then water.</p>\n"
        );
        assert_eq!(report.stats.injected_by_category.get(&UrlCategory::Category), Some(&1));
        assert_eq!(report.stats.links[0].segment_index, 1);
    }

    #[test]
    fn test_anchor_miss_without_refill() {
        // Only occurrence of the title sits inside an existing link.
        let html = r#"<p>see <a href="/x">pots</a> now</p><p>pots again</p>"#;
        let report = linker(&["https://x.com/category/pots/"]).add_internal_links(html, Some(1));
        assert_eq!(report.stats.injected(), 0);
        assert_eq!(report.stats.anchor_misses, 1);
        assert_eq!(report.html, html);
    }

    #[test]
    fn test_miss_reasons_are_counted_separately() {
        // "pots" is found inside "flowerpots" as text but has no word-bounded occurrence
        let report = linker(&["https://x.com/category/pots/"]).add_internal_links("<p>flowerpots only</p>", Some(1));
        assert_eq!(report.stats.injection_misses, 1);
        assert_eq!(report.stats.destination_present, 0);
        assert_eq!(report.stats.anchor_misses, 0);
    }

    #[test]
    fn test_refill_uses_next_candidate() {
        let html = r#"<p>see <a href="/x">pots</a></p><p>more pots here</p>"#;
        let config = LinkerConfig::builder().refill_on_anchor_miss(true).build().unwrap();
        let linker = InternalLinker::new(["https://x.com/category/pots/"], config).unwrap();
        let report = linker.add_internal_links(html, Some(1));
        assert_eq!(report.stats.injected(), 1);
        assert_eq!(report.stats.links[0].segment_index, 1);
    }

    #[test]
    fn test_explain() {
        let linker = linker(&["https://x.com/blog/garden-tools/"]);
        let breakdown = linker.explain("New garden tools", "https://x.com/blog/garden-tools/").unwrap();
        assert!(breakdown.exact_title > 0.0);
        assert!(linker.explain("x", "https://x.com/missing/").is_none());
    }

    #[test]
    fn test_link_articles_isolated_state() {
        let linker = linker(&["https://x.com/category/pots/"]);
        let articles = vec!["<p>pots</p>".to_string(), "<p>clay pots</p>".to_string()];
        let reports: Vec<_> = articles
            .iter()
            .map(|a| linker.add_internal_links(a, Some(1)))
            .collect();
        assert!(reports.iter().all(|r| r.stats.injected() == 1));

        let parallel = InternalLinker::new(
            ["https://x.com/category/pots/"],
            LinkerConfig::builder().max_links(Some(1)).build().unwrap(),
        )
        .unwrap()
        .link_articles(&articles);
        assert_eq!(parallel.len(), 2);
        assert!(parallel.iter().all(|r| r.stats.injected() == 1));
    }
}
