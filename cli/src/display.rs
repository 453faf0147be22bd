use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;
use crate::wikipedia::page_url;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🌐 Finding path from {} to {}",
        colors.endpoint(&format!("\"{}\"", request.from_title)),
        colors.endpoint(&format!("\"{}\"", request.to_title))
    );
    println!(
        "⚙️  Similarity weight {}, at most {} articles, {} sec budget",
        colors.number(&format!("{}", request.config.beta)),
        colors.number(&request.config.max_depth.to_string()),
        colors.number(&request.config.max_time.as_secs().to_string())
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, colors: &ColorScheme) {
    let options = &result.display_options;

    if options.verbose {
        println!("\n---\n");
    }

    match &result.outcome.path {
        Some(path) => {
            display_successful_path(path, options, colors);
            if !options.quiet {
                println!(
                    "\n{} Path found in {} sec",
                    colors.success("✅"),
                    colors.number(&format!("{:.2}", result.outcome.elapsed_seconds))
                );
            }
        }
        None => {
            println!(
                "{} {} and {} within the given limits",
                colors.error("❌ No path found between"),
                colors.endpoint(&format!("\"{}\"", result.from_title)),
                colors.endpoint(&format!("\"{}\"", result.to_title))
            );
            if !options.quiet {
                println!(
                    "{}",
                    colors.hint("💡 Try increasing --max-depth or --max-time")
                );
            }
        }
    }

    if options.verbose {
        display_search_statistics(
            result.outcome.pages_expanded,
            result.outcome.elapsed_seconds,
            colors,
        );
    }
}

fn display_successful_path(path: &[String], display_options: &Args, colors: &ColorScheme) {
    let last_index = path.len().saturating_sub(1);
    let arrow = format!(" {} ", colors.link_arrow("→"));
    let path_flow = path
        .iter()
        .enumerate()
        .map(|(step_index, title)| {
            let quoted = format!("\"{}\"", title);
            if step_index == 0 || step_index == last_index {
                colors.endpoint(&quoted).to_string()
            } else {
                colors.page_title(&quoted).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&arrow);
    println!("{}", path_flow);

    if display_options.quiet {
        return;
    }

    println!();
    for (step_index, title) in path.iter().enumerate() {
        let formatted_line = format_path_step(step_index, title, display_options, colors);
        println!("{}", formatted_line);
    }
    println!(
        "\nLength: {} articles",
        colors.number(&path.len().to_string())
    );
}

pub fn format_path_step(
    step_index: usize,
    title: &str,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let step_number = format!("{}.", step_index + 1);
    let mut formatted_line = format!(
        "{:3} {}",
        colors.step_number(&step_number),
        colors.page_title(&format!("\"{}\"", title))
    );

    if !display_options.hide_urls {
        formatted_line.push_str(&format!(
            " - {}",
            colors.url(&page_url(&display_options.lang, title))
        ));
    }

    formatted_line
}

fn display_search_statistics(pages_expanded: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} articles in {} sec",
        "📊",
        colors.number(&format_number(pages_expanded)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
