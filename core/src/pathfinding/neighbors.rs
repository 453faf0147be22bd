use crate::similarity::{Scores, SimilarityScorer};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Share of scored candidates kept per expansion
pub const RETAINED_FRACTION: f64 = 0.1;
/// Candidates returned, unscored, when the batch has no usable vocabulary
pub const FALLBACK_CANDIDATES: usize = 5;

pub type ScoredLink = (String, f32);

/// Lowest path length at which each title has been admitted so far.
#[derive(Debug, Clone, Default)]
pub struct VisitedCosts {
    costs: FxHashMap<String, usize>,
}

impl VisitedCosts {
    pub fn new(start: &str) -> Self {
        let mut costs = FxHashMap::default();
        costs.insert(start.to_string(), 0);
        Self { costs }
    }

    pub fn cost(&self, title: &str) -> Option<usize> {
        self.costs.get(title).copied()
    }

    /// A title is admitted when unseen or when `cost` strictly improves on
    /// the recorded one.
    pub fn admits(&self, title: &str, cost: usize) -> bool {
        match self.costs.get(title) {
            Some(&recorded) => recorded > cost,
            None => true,
        }
    }

    fn record(&mut self, title: &str, cost: usize) {
        debug_assert!(self.admits(title, cost));
        self.costs.insert(title.to_string(), cost);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Picks the next hops worth pushing from a page with the given links.
///
/// Returns `None` when nothing is admissible. A direct link to `goal` short
/// circuits scoring and bookkeeping with a perfect score.
pub fn expand_neighbors<S: SimilarityScorer + ?Sized>(
    links: &BTreeSet<String>,
    visited: &mut VisitedCosts,
    current_cost: usize,
    goal: &str,
    target_text: &str,
    scorer: &S,
) -> Option<Vec<ScoredLink>> {
    if links.contains(goal) {
        return Some(vec![(goal.to_string(), 1.0)]);
    }

    let next_cost = current_cost + 1;
    let candidates: Vec<String> = links
        .iter()
        .filter(|link| visited.admits(link, next_cost))
        .cloned()
        .collect();

    if candidates.is_empty() {
        return None;
    }

    for candidate in &candidates {
        visited.record(candidate, next_cost);
    }

    match scorer.score(target_text, &candidates) {
        Scores::Ranked(scores) => Some(select_top_candidates(candidates, scores)),
        Scores::Fallback => Some(fallback_candidates(candidates)),
    }
}

fn select_top_candidates(candidates: Vec<String>, scores: Vec<f32>) -> Vec<ScoredLink> {
    let keep = ((RETAINED_FRACTION * candidates.len() as f64).ceil() as usize).max(1);

    let mut scored: Vec<ScoredLink> = candidates.into_iter().zip(scores).collect();
    // Stable sort: equal scores keep their lexicographic link order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(keep);
    scored
}

fn fallback_candidates(candidates: Vec<String>) -> Vec<ScoredLink> {
    candidates
        .into_iter()
        .take(FALLBACK_CANDIDATES)
        .map(|title| (title, 0.0))
        .collect()
}
