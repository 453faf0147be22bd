use reqwest::blocking::Client;
use serde::Deserialize;
use std::{collections::BTreeSet, error::Error, time::Duration};
use tracing::{debug, warn};
use wikipath_core::PageSource;

const USER_AGENT: &str = concat!(
    "wikipath/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/malbiruk/wikipath)"
);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
// Hubs like "United States" link to tens of thousands of articles
const MAX_LINK_BATCHES: usize = 50;

type FetchResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "continue")]
    pub continuation: Option<Continuation>,
    pub query: Option<Query>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Continuation {
    pub plcontinue: Option<String>,
    #[serde(rename = "continue")]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    pub pageprops: Option<PageProps>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    pub disambiguation: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Link {
    pub title: String,
}

/// Plain-text body of the first page, empty for missing, invalid, or
/// disambiguation pages.
pub fn parse_extract_response(body: &str) -> FetchResult<String> {
    let response: QueryResponse = serde_json::from_str(body)?;
    let Some(page) = response.query.and_then(|q| q.pages.into_iter().next()) else {
        return Ok(String::new());
    };

    if page.missing || page.invalid {
        debug!(title = %page.title, "page does not exist");
        return Ok(String::new());
    }
    if page.pageprops.is_some_and(|props| props.disambiguation.is_some()) {
        debug!(title = %page.title, "disambiguation page");
        return Ok(String::new());
    }

    Ok(page.extract.unwrap_or_default())
}

/// One batch of link titles plus the continuation to request the next one.
pub fn parse_links_response(body: &str) -> FetchResult<(Vec<String>, Option<Continuation>)> {
    let response: QueryResponse = serde_json::from_str(body)?;
    let links = response
        .query
        .map(|query| {
            query
                .pages
                .into_iter()
                .filter(|page| !page.missing && !page.invalid)
                .flat_map(|page| page.links.into_iter().map(|link| link.title))
                .collect()
        })
        .unwrap_or_default();

    let continuation = response
        .continuation
        .filter(|continuation| continuation.plcontinue.is_some());

    Ok((links, continuation))
}

pub fn page_url(lang: &str, title: &str) -> String {
    format!(
        "https://{}.wikipedia.org/wiki/{}",
        lang,
        urlencoding::encode(&title.replace(' ', "_"))
    )
}

/// Live article graph backed by the MediaWiki Action API.
pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(lang: &str) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url: format!("https://{}.wikipedia.org/w/api.php", lang),
        })
    }

    fn get(&self, params: &[(&str, &str)]) -> FetchResult<String> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }

    fn try_fetch_text(&self, title: &str) -> FetchResult<String> {
        let body = self.get(&[
            ("titles", title),
            ("prop", "extracts|pageprops"),
            ("ppprop", "disambiguation"),
            ("explaintext", "1"),
            ("redirects", "1"),
        ])?;
        parse_extract_response(&body)
    }

    fn try_fetch_links(&self, title: &str) -> FetchResult<BTreeSet<String>> {
        let mut links = BTreeSet::new();
        let mut continuation: Option<Continuation> = None;

        for _ in 0..MAX_LINK_BATCHES {
            let mut params = vec![
                ("titles", title),
                ("prop", "links"),
                ("plnamespace", "0"),
                ("pllimit", "max"),
                ("redirects", "1"),
            ];
            if let Some(next) = &continuation {
                if let Some(plcontinue) = next.plcontinue.as_deref() {
                    params.push(("plcontinue", plcontinue));
                }
                if let Some(token) = next.token.as_deref() {
                    params.push(("continue", token));
                }
            }

            let body = self.get(&params)?;
            let (batch, next) = parse_links_response(&body)?;
            links.extend(batch);

            match next {
                Some(next) => continuation = Some(next),
                None => return Ok(links),
            }
        }

        warn!(title, links = links.len(), "link listing truncated");
        Ok(links)
    }
}

impl PageSource for WikipediaClient {
    fn fetch_text(&self, title: &str) -> String {
        self.try_fetch_text(title).unwrap_or_else(|e| {
            warn!(title, error = %e, "failed to fetch page text");
            String::new()
        })
    }

    fn fetch_links(&self, title: &str) -> BTreeSet<String> {
        self.try_fetch_links(title).unwrap_or_else(|e| {
            warn!(title, error = %e, "failed to fetch page links");
            BTreeSet::new()
        })
    }
}
