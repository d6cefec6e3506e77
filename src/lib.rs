pub mod anchor;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod injector;
pub mod planner;
pub mod scoring;
pub mod segmenter;
pub mod sources;
pub mod utils;

pub use anchor::{AnchorMatch, AnchorStrategy, AnchorTextSelector};
pub use catalog::{CatalogStatistics, UrlCatalog, UrlCatalogEntry, UrlCategorizer, UrlCategory};
pub use config::{LinkerConfig, LinkerConfigBuilder, LinkingTables, WordsPerLink};
pub use engine::{InjectedLink, InternalLinker, LinkRunStatistics, LinkingReport};
pub use errors::{LinkerError, LinkerResult};
pub use injector::{InjectionMiss, InjectionOutcome, LinkInjector};
pub use planner::{LinkBudgetPlanner, LinkCandidate, PlacementState, link_budget};
pub use scoring::{RelevanceScorer, ScoreBreakdown, SemanticCluster};
pub use segmenter::{ContentSegment, SegmentKind, Segmentation, segment};
pub use sources::{UrlListFile, UrlSource};

/// Link one article with a throwaway engine built from `urls` and the default
/// configuration.
pub fn add_internal_links<I, S>(html: &str, urls: I, max_links: Option<usize>) -> LinkerResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let linker = InternalLinker::new(urls, LinkerConfig::default())?;
    Ok(linker.add_internal_links(html, max_links).into_html())
}
