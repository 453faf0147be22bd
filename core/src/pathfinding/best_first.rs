use super::frontier::{Frontier, SearchNode};
use super::neighbors::{VisitedCosts, expand_neighbors};
use crate::page_source::PageSource;
use crate::pathfinding_config::SearchConfig;
use crate::similarity::{SimilarityScorer, TfidfScorer};
use std::time::Instant;
use tracing::{debug, info};

/// Expansions after which the progress estimate reads as complete
pub const PROGRESS_HORIZON: usize = 1000;

/// Hooks invoked once per loop iteration. They observe the search and never
/// steer it; `()` is the observer that ignores everything.
pub trait SearchObserver {
    fn on_step(&mut self, _title: &str) {}

    fn on_progress(&mut self, _fraction: f32) {}
}

impl SearchObserver for () {}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub path: Option<Vec<String>>,
    pub elapsed_seconds: f64,
    pub pages_expanded: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Similarity-guided best-first search from `start` to `goal` using TF-IDF
/// scoring of link titles against the goal's text.
pub fn search<P, O>(
    start: &str,
    goal: &str,
    config: &SearchConfig,
    source: &P,
    observer: &mut O,
) -> SearchOutcome
where
    P: PageSource + ?Sized,
    O: SearchObserver + ?Sized,
{
    search_with_scorer(start, goal, config, source, &TfidfScorer, observer)
}

pub fn search_with_scorer<P, S, O>(
    start: &str,
    goal: &str,
    config: &SearchConfig,
    source: &P,
    scorer: &S,
    observer: &mut O,
) -> SearchOutcome
where
    P: PageSource + ?Sized,
    S: SimilarityScorer + ?Sized,
    O: SearchObserver + ?Sized,
{
    let search_timer = Instant::now();
    info!(start, goal, beta = config.beta, max_depth = config.max_depth, "starting search");

    let target_text = source.fetch_text(goal);
    if target_text.is_empty() {
        debug!(goal, "goal page has no text, similarity will be uninformative");
    }

    let mut visited = VisitedCosts::new(start);
    let mut frontier = Frontier::new();
    frontier.push(0.0, SearchNode::origin(start));

    let mut pages_expanded = 0;

    let finish = |path: Option<Vec<String>>, pages_expanded: usize| {
        let elapsed_seconds = search_timer.elapsed().as_secs_f64();
        info!(
            found = path.is_some(),
            pages_expanded,
            elapsed_seconds,
            "search finished"
        );
        SearchOutcome {
            path,
            elapsed_seconds,
            pages_expanded,
        }
    };

    while !frontier.is_empty() {
        if search_timer.elapsed() > config.max_time {
            debug!(pages_expanded, "time budget exhausted");
            return finish(None, pages_expanded);
        }

        let Some((priority, node)) = frontier.pop() else {
            break;
        };
        pages_expanded += 1;

        observer.on_step(&node.title);
        observer.on_progress((pages_expanded as f32 / PROGRESS_HORIZON as f32).min(1.0));

        if node.title == goal {
            return finish(Some(node.path), pages_expanded);
        }

        let links = source.fetch_links(&node.title);
        let Some(neighbors) = expand_neighbors(
            &links,
            &mut visited,
            node.depth(),
            goal,
            &target_text,
            scorer,
        ) else {
            debug!(title = %node.title, links = links.len(), "dead end");
            continue;
        };

        debug!(
            title = %node.title,
            priority,
            links = links.len(),
            retained = neighbors.len(),
            "expanded page"
        );

        for (title, similarity) in neighbors {
            if similarity <= 0.0 {
                continue;
            }
            if node.depth() + 1 > config.max_depth {
                continue;
            }
            frontier.push(-similarity * config.beta, node.extend(&title));
        }
    }

    finish(None, pages_expanded)
}
