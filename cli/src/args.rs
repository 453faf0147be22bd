use clap::{Parser, builder::TypedValueParser};
use wikipath_core::pathfinding_config::{DEFAULT_BETA, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TIME_SECS};

#[derive(Parser, Debug, Clone)]
#[command(name = "wikipath")]
#[command(about = "Find a chain of links between two Wikipedia articles")]
pub struct Args {
    /// Title of the article to start from
    pub from: String,

    /// Title of the article to reach
    pub to: String,

    /// Weight of link similarity when ranking pages to explore
    #[arg(short, long, value_name = "WEIGHT", default_value_t = DEFAULT_BETA)]
    pub beta: f32,

    /// Maximum number of articles in the path, both ends included
    #[arg(
        short = 'd',
        long,
        value_name = "PAGES",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::value_parser!(u16).range(2..=30).map(usize::from)
    )]
    pub max_depth: usize,

    /// Give up after this many seconds
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_MAX_TIME_SECS,
        value_parser = clap::value_parser!(u64).range(10..=600)
    )]
    pub max_time: u64,

    /// Wikipedia language edition
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub lang: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide article URLs from output (URLs shown by default)
    #[arg(short = 'u', long)]
    pub hide_urls: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
