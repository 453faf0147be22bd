#![allow(dead_code)]

use std::{cell::RefCell, collections::BTreeSet};
use wikipath_core::{InMemoryPageSource, PageSource, SearchObserver};

pub const APOLLO_11_TEXT: &str = "Apollo 11 was the spaceflight of the Apollo program \
    that first landed humans on the Moon. Commander Neil Armstrong and lunar module pilot \
    Buzz Aldrin landed the Apollo Lunar Module Eagle on the Moon.";

/// Napoleon links to a relevant and an unrelated page; only the relevant one
/// leads on to the goal.
pub fn moon_landing_graph() -> InMemoryPageSource {
    InMemoryPageSource::new()
        .with_page(
            "Napoleon",
            "Napoleon Bonaparte was a French military commander and emperor.",
            ["Apollo program", "French cuisine"],
        )
        .with_page("Apollo program", APOLLO_11_TEXT, ["Apollo 11", "NASA"])
        .with_page(
            "French cuisine",
            "French cuisine consists of cooking traditions from France.",
            ["Cheese"],
        )
        .with_page("Cheese", "Cheese is a dairy product.", Vec::<String>::new())
        .with_page("Apollo 11", APOLLO_11_TEXT, ["Apollo program"])
}

/// Goal sits four hops from the start along a chain of topical pages.
pub fn space_race_chain() -> InMemoryPageSource {
    InMemoryPageSource::new()
        .with_page(
            "Cold War",
            "Geopolitical tension.",
            ["Cuban Missile Crisis", "Space Race"],
        )
        .with_page("Cuban Missile Crisis", "A confrontation.", ["Fidel Castro"])
        .with_page("Space Race", "Competition in spaceflight.", ["Moon exploration"])
        .with_page("Moon exploration", "Missions to the Moon.", ["Lunar landing"])
        .with_page("Lunar landing", "Arrival on the Moon.", ["Apollo 11"])
        .with_page(
            "Apollo 11",
            "Apollo 11 was the first crewed lunar landing, the peak of the space race \
             and of moon exploration.",
            Vec::<String>::new(),
        )
}

#[derive(Default)]
pub struct RecordingObserver {
    pub steps: Vec<String>,
    pub progress: Vec<f32>,
}

impl SearchObserver for RecordingObserver {
    fn on_step(&mut self, title: &str) {
        self.steps.push(title.to_string());
    }

    fn on_progress(&mut self, fraction: f32) {
        self.progress.push(fraction);
    }
}

/// Wraps a source and remembers every title requested from it.
pub struct CountingSource<S> {
    pub inner: S,
    pub text_requests: RefCell<Vec<String>>,
    pub link_requests: RefCell<Vec<String>>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            text_requests: RefCell::new(Vec::new()),
            link_requests: RefCell::new(Vec::new()),
        }
    }
}

impl<S: PageSource> PageSource for CountingSource<S> {
    fn fetch_text(&self, title: &str) -> String {
        self.text_requests.borrow_mut().push(title.to_string());
        self.inner.fetch_text(title)
    }

    fn fetch_links(&self, title: &str) -> BTreeSet<String> {
        self.link_requests.borrow_mut().push(title.to_string());
        self.inner.fetch_links(title)
    }
}
