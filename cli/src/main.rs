use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikipath::colors::ColorScheme;
use wikipath::display::{display_search_info, display_search_results};
use wikipath::json_output::{create_json_output, print_json_output};
use wikipath::search::ProgressReporter;
use wikipath::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let search_args = Args::parse();
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    let search_request = match create_search_request(search_args) {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    let client = match WikipediaClient::new(&search_request.search_args.lang) {
        Ok(client) => client,
        Err(e) => exit_with_error(&colors, &e.to_string()),
    };

    let json_mode = search_request.search_args.json;
    if search_request.search_args.verbose && !json_mode {
        display_search_info(&search_request, &colors);
    }

    let mut progress = ProgressReporter::new(!json_mode && !search_request.search_args.quiet);
    let search_result = execute_search(search_request, &client, &mut progress);
    progress.finish();

    if json_mode {
        print_json_output(&create_json_output(&search_result));
    } else {
        display_search_results(&search_result, &colors);
    }

    if !search_result.outcome.is_found() {
        std::process::exit(1);
    }
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{}", colors.error(&format!("❌ Error: {}", message)));
    std::process::exit(1);
}
