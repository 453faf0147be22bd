pub mod best_first;
pub mod frontier;
pub mod neighbors;

// Re-export the public functions
pub use best_first::{PROGRESS_HORIZON, SearchObserver, SearchOutcome, search, search_with_scorer};
pub use frontier::{Frontier, SearchNode};
pub use neighbors::{ScoredLink, VisitedCosts, expand_neighbors};
