//! Lexical relevance scoring between article segments and catalog entries.

pub mod relevance;
pub mod semantic;

pub use relevance::{RelevanceScorer, ScoreBreakdown};
pub use semantic::{SemanticCluster, default_anchor_nouns, default_clusters};
