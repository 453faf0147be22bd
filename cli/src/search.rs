use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use wikipath_core::{
    PageSource, SearchConfig, SearchObserver, SearchOutcome, search,
    pathfinding::PROGRESS_HORIZON, string_normalization::normalize_title,
};

use crate::args::Args;

pub struct SearchRequest {
    pub from_title: String,
    pub to_title: String,
    pub config: SearchConfig,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub from_title: String,
    pub to_title: String,
    pub display_options: Args,
}

pub fn create_search_request(args: Args) -> Result<SearchRequest, String> {
    let from_title = normalize_title(&args.from);
    let to_title = normalize_title(&args.to);

    if from_title.is_empty() {
        return Err("Start article title is empty".to_string());
    }
    if to_title.is_empty() {
        return Err("Target article title is empty".to_string());
    }

    let config = SearchConfig::new(
        args.beta,
        args.max_depth,
        Duration::from_secs(args.max_time),
    )
    .map_err(|e| e.to_string())?;

    Ok(SearchRequest {
        from_title,
        to_title,
        config,
        search_args: args,
    })
}

/// Spinner showing how far the search has got and which article it is on.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(PROGRESS_HORIZON as u64)
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {msg}",
        ) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for ProgressReporter {
    fn on_step(&mut self, title: &str) {
        self.bar.set_message(format!("Visiting: {}", title));
    }

    fn on_progress(&mut self, fraction: f32) {
        self.bar
            .set_position((fraction * PROGRESS_HORIZON as f32).round() as u64);
    }
}

pub fn execute_search<P: PageSource + ?Sized>(
    request: SearchRequest,
    source: &P,
    observer: &mut dyn SearchObserver,
) -> SearchResult {
    let outcome = search(
        &request.from_title,
        &request.to_title,
        &request.config,
        source,
        observer,
    );

    SearchResult {
        outcome,
        from_title: request.from_title,
        to_title: request.to_title,
        display_options: request.search_args,
    }
}
