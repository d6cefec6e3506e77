//! Even-distribution selection of link candidates.
//!
//! Target positions `0, spacing, 2 * spacing, ...` are walked in order; each
//! takes the eligible candidate closest to it, within half a spacing. Slots
//! with nothing nearby are backfilled from the best remaining candidates.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::CategoryCounts;

use super::candidates::LinkCandidate;
use super::{PlacementState, PlannerSettings};

/// Running view used while picking: committed state plus this round's picks.
struct Round<'s> {
    state: &'s PlacementState,
    urls: HashSet<String>,
    segments: HashSet<usize>,
    distribution: CategoryCounts,
}

impl<'s> Round<'s> {
    fn new(state: &'s PlacementState) -> Self {
        Self {
            state,
            urls: HashSet::new(),
            segments: HashSet::new(),
            distribution: state.distribution,
        }
    }

    fn available(&self, c: &LinkCandidate<'_>) -> bool {
        !self.state.url_used(c.url())
            && !self.state.segment_used(c.segment_index)
            && !self.state.is_rejected(c.segment_index, c.url())
            && !self.urls.contains(c.url())
            && !self.segments.contains(&c.segment_index)
    }

    fn take(&mut self, c: &LinkCandidate<'_>) {
        self.urls.insert(c.url().to_string());
        self.segments.insert(c.segment_index);
        self.distribution.increment(c.category());
    }
}

/// Score after the anti-clustering penalty for the current distribution.
fn effective_score(
    settings: &PlannerSettings,
    c: &LinkCandidate<'_>,
    distribution: &CategoryCounts,
    remaining_slots: usize,
) -> f64 {
    let placed = distribution.get(c.category()) as f64;
    if placed > remaining_slots as f64 / settings.overrepresentation_divisor {
        c.score * settings.overrepresentation_penalty
    } else {
        c.score
    }
}

/// Higher score first, then category priority, then earlier segment.
fn rank(a: (f64, &LinkCandidate<'_>), b: (f64, &LinkCandidate<'_>)) -> Ordering {
    b.0.total_cmp(&a.0)
        .then_with(|| a.1.category().cmp(&b.1.category()))
        .then_with(|| a.1.segment_index.cmp(&b.1.segment_index))
}

pub(crate) fn select<'c>(
    settings: &PlannerSettings,
    candidates: &[LinkCandidate<'c>],
    max_links: usize,
    segment_count: usize,
    state: &PlacementState,
) -> Vec<LinkCandidate<'c>> {
    if max_links == 0 || candidates.is_empty() || segment_count == 0 {
        return Vec::new();
    }

    let spacing = segment_count as f64 / max_links as f64;
    let window = spacing / 2.0;
    let mut round = Round::new(state);
    let mut picked: Vec<LinkCandidate<'c>> = Vec::with_capacity(max_links);

    for slot in 0..max_links {
        let target = slot as f64 * spacing;
        let remaining = max_links - picked.len();

        let distance = |c: &LinkCandidate<'_>| (c.segment_index as f64 - target).abs();
        let best = candidates
            .iter()
            .filter(|c| round.available(c) && distance(*c) <= window)
            .map(|c| (effective_score(settings, c, &round.distribution, remaining), c))
            .filter(|(score, _)| *score > settings.min_score)
            .min_by(|a, b| distance(a.1).total_cmp(&distance(b.1)).then_with(|| rank(*a, *b)));

        if let Some((_, c)) = best {
            round.take(c);
            picked.push(c.clone());
        }
    }

    while picked.len() < max_links {
        let remaining = max_links - picked.len();
        let best = candidates
            .iter()
            .filter(|c| round.available(c))
            .map(|c| (effective_score(settings, c, &round.distribution, remaining), c))
            .filter(|(score, _)| *score > settings.min_score)
            .min_by(|a, b| rank(*a, *b));

        match best {
            Some((_, c)) => {
                round.take(c);
                picked.push(c.clone());
            }
            None => break,
        }
    }

    picked.sort_by_key(|c| c.segment_index);
    picked
}
