use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, fs, path::Path};

/// Lazily revealed graph of pages.
///
/// Implementations never fail into the caller: a page that cannot be
/// retrieved reads as empty text and no links, which the search treats as a
/// dead end.
pub trait PageSource {
    fn fetch_text(&self, title: &str) -> String;

    fn fetch_links(&self, title: &str) -> BTreeSet<String>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_text(&self, title: &str) -> String {
        (**self).fetch_text(title)
    }

    fn fetch_links(&self, title: &str) -> BTreeSet<String> {
        (**self).fetch_links(title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturePage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub links: BTreeSet<String>,
}

/// Fixture-backed page source. Titles that are not present behave like
/// pages that failed to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryPageSource {
    pages: FxHashMap<String, FixturePage>,
}

#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "failed to read fixture: {}", e),
            FixtureError::Json(e) => write!(f, "failed to parse fixture: {}", e),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            FixtureError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(e: std::io::Error) -> Self {
        FixtureError::Io(e)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::Json(e)
    }
}

impl InMemoryPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page<I, L>(mut self, title: &str, text: &str, links: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.insert_page(title, text, links);
        self
    }

    pub fn insert_page<I, L>(&mut self, title: &str, text: &str, links: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.pages.insert(
            title.to_string(),
            FixturePage {
                text: text.to_string(),
                links: links.into_iter().map(Into::into).collect(),
            },
        );
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSource for InMemoryPageSource {
    fn fetch_text(&self, title: &str) -> String {
        self.pages
            .get(title)
            .map(|page| page.text.clone())
            .unwrap_or_default()
    }

    fn fetch_links(&self, title: &str) -> BTreeSet<String> {
        self.pages
            .get(title)
            .map(|page| page.links.clone())
            .unwrap_or_default()
    }
}
