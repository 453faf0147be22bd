pub mod page_source;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod similarity;
pub mod string_normalization;

// Re-export commonly used items
pub use page_source::{FixtureError, InMemoryPageSource, PageSource};
pub use pathfinding::{SearchObserver, SearchOutcome, search, search_with_scorer};
pub use pathfinding_config::{ConfigError, SearchConfig};
pub use similarity::{Scores, SimilarityScorer, TfidfScorer};
