use serde::{Deserialize, Serialize};

use crate::search::SearchResult;
use crate::wikipedia::page_url;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub beta: f32,
    pub max_depth: usize,
    pub max_time: u64,
    pub lang: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonPage>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPage {
    pub title: String,
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub pages_expanded: usize,
}

pub fn create_json_output(result: &SearchResult) -> JsonOutput {
    let options = &result.display_options;

    let json_path = result.outcome.path.as_ref().map(|path| {
        path.iter()
            .map(|title| JsonPage {
                title: title.clone(),
                url: page_url(&options.lang, title),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.from_title.clone(),
            to: result.to_title.clone(),
            options: JsonOptions {
                beta: options.beta,
                max_depth: options.max_depth,
                max_time: options.max_time,
                lang: options.lang.clone(),
            },
        },
        result: JsonResult {
            found: result.outcome.is_found(),
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: (result.outcome.elapsed_seconds * 1000.0) as u64,
            pages_expanded: result.outcome.pages_expanded,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
