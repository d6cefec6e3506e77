//! Static semantic word clusters.
//!
//! A cluster groups domain terms that belong together (planting, soil,
//! fertilizer, ...). A segment and a catalog title that both mention terms of
//! the same cluster are considered topically related even when they share no
//! literal words.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticCluster {
    pub name: String,
    pub terms: Vec<String>,
}

impl SemanticCluster {
    pub fn new(name: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            terms: terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// True when lowercased `text` mentions any term of this cluster
    pub fn mentioned_in(&self, text_lower: &str) -> bool {
        self.terms
            .iter()
            .any(|t| !t.is_empty() && text_lower.contains(t.as_str()))
    }
}

/// The built-in bilingual (Persian / English) gardening clusters.
pub fn default_clusters() -> Vec<SemanticCluster> {
    vec![
        SemanticCluster::new(
            "planting",
            &["کاشت", "نشا", "بذر", "قلمه", "تکثیر", "پیوند", "planting", "seed", "sowing", "cutting"],
        ),
        SemanticCluster::new(
            "soil",
            &["خاک", "بستر", "کوکوپیت", "پیت ماس", "پرلیت", "ورمی", "soil", "substrate", "compost", "perlite"],
        ),
        SemanticCluster::new(
            "fertilizer",
            &["کود", "تغذیه", "ویتامین", "هورمون", "fertilizer", "nutrient", "npk"],
        ),
        SemanticCluster::new(
            "watering",
            &["آبیاری", "رطوبت", "آبپاش", "watering", "irrigation", "humidity"],
        ),
        SemanticCluster::new(
            "pests",
            &["آفت", "سمپاش", "حشره", "قارچ", "بیماری", "pest", "fungicide", "insecticide"],
        ),
        SemanticCluster::new(
            "pots",
            &["گلدان", "زیرگلدانی", "تراریوم", "planter", "pot"],
        ),
        SemanticCluster::new(
            "flowers",
            &["فلاور", "ارکیده", "شمعدانی", "بنفشه", "flower", "orchid", "bloom"],
        ),
        SemanticCluster::new(
            "houseplants",
            &["آپارتمانی", "کاکتوس", "ساکولنت", "بونسای", "houseplant", "cactus", "succulent", "bonsai"],
        ),
        SemanticCluster::new(
            "tools",
            &["ابزار", "قیچی", "بیلچه", "شلنگ", "tool", "shears", "trowel", "hose"],
        ),
    ]
}

/// Semantic anchor nouns: short domain nouns that make good anchors on their own.
pub fn default_anchor_nouns() -> Vec<String> {
    [
        "گلدان", "کود", "خاک", "بذر", "نشا", "قلمه", "سمپاش", "ارکیده", "کاکتوس", "بونسای",
        "فلاور", "ساکولنت", "کوکوپیت", "پرلیت", "قیچی", "بیلچه", "pot", "soil", "seed",
        "fertilizer", "cactus", "orchid", "bonsai", "compost",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentioned_in() {
        let clusters = default_clusters();
        let soil = clusters.iter().find(|c| c.name == "soil").unwrap();
        assert!(soil.mentioned_in("برای این گیاه از خاک سبک استفاده کنید"));
        assert!(soil.mentioned_in("use a light soil mix"));
        assert!(!soil.mentioned_in("water twice a week"));
    }

    #[test]
    fn test_terms_are_lowercased() {
        let c = SemanticCluster::new("x", &["NPK"]);
        assert!(c.mentioned_in("npk 20-20-20"));
    }
}
