//! Static lookup tables consumed by the categorizer, scorer and anchor
//! selector. Owned by configuration so tests and deployments can swap them.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryRules;
use crate::scoring::{SemanticCluster, default_anchor_nouns, default_clusters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingTables {
    /// Path patterns per URL category
    pub category_rules: CategoryRules,
    /// Related-term groups for the semantic bonus
    pub semantic_clusters: Vec<SemanticCluster>,
    /// Short domain nouns usable as stand-alone anchors
    pub anchor_nouns: Vec<String>,
}

impl Default for LinkingTables {
    fn default() -> Self {
        Self {
            category_rules: CategoryRules::default(),
            semantic_clusters: default_clusters(),
            anchor_nouns: default_anchor_nouns(),
        }
    }
}
