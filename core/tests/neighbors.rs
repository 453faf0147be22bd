use std::collections::BTreeSet;
use wikipath_core::TfidfScorer;
use wikipath_core::pathfinding::{VisitedCosts, expand_neighbors};

fn links(titles: &[&str]) -> BTreeSet<String> {
    titles.iter().map(|title| title.to_string()).collect()
}

const TARGET_TEXT: &str = "The Eiffel Tower is a wrought iron lattice tower in Paris, France.";

#[test]
fn test_goal_link_short_circuits_with_perfect_score() {
    let mut visited = VisitedCosts::new("Start");

    let selected = expand_neighbors(
        &links(&["Eiffel Tower", "Paris", "Iron"]),
        &mut visited,
        1,
        "Eiffel Tower",
        TARGET_TEXT,
        &TfidfScorer,
    );

    assert_eq!(selected, Some(vec![("Eiffel Tower".to_string(), 1.0)]));
    // Shortcut leaves the bookkeeping untouched
    assert_eq!(visited.cost("Paris"), None);
    assert_eq!(visited.len(), 1);
}

#[test]
fn test_empty_links_yield_nothing() {
    let mut visited = VisitedCosts::new("Start");

    let selected = expand_neighbors(
        &BTreeSet::new(),
        &mut visited,
        1,
        "Eiffel Tower",
        TARGET_TEXT,
        &TfidfScorer,
    );

    assert!(selected.is_none());
}

#[test]
fn test_admitted_links_record_next_cost_before_scoring() {
    let mut visited = VisitedCosts::new("Start");

    let selected = expand_neighbors(
        &links(&["Lattice tower", "Baking", "Gardening"]),
        &mut visited,
        2,
        "Eiffel Tower",
        TARGET_TEXT,
        &TfidfScorer,
    )
    .expect("admissible links");

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].0, "Lattice tower");
    assert!(selected[0].1 > 0.0);

    // Every admitted link is recorded, not only the retained one
    assert_eq!(visited.cost("Lattice tower"), Some(3));
    assert_eq!(visited.cost("Baking"), Some(3));
    assert_eq!(visited.cost("Gardening"), Some(3));
}

#[test]
fn test_links_are_readmitted_only_at_strictly_lower_cost() {
    let mut visited = VisitedCosts::new("Start");
    let paris = links(&["Paris"]);

    expand_neighbors(&paris, &mut visited, 4, "Goal", TARGET_TEXT, &TfidfScorer);
    assert_eq!(visited.cost("Paris"), Some(5));

    // Same cost again: nothing admissible
    let same = expand_neighbors(&paris, &mut visited, 4, "Goal", TARGET_TEXT, &TfidfScorer);
    assert!(same.is_none());

    // Worse cost: still nothing, and the recorded cost does not grow
    let worse = expand_neighbors(&paris, &mut visited, 6, "Goal", TARGET_TEXT, &TfidfScorer);
    assert!(worse.is_none());
    assert_eq!(visited.cost("Paris"), Some(5));

    // Better cost: admitted and lowered
    let better = expand_neighbors(&paris, &mut visited, 1, "Goal", TARGET_TEXT, &TfidfScorer);
    assert!(better.is_some());
    assert_eq!(visited.cost("Paris"), Some(2));
}

#[test]
fn test_start_page_is_never_readmitted() {
    let mut visited = VisitedCosts::new("Start");

    let selected = expand_neighbors(
        &links(&["Start"]),
        &mut visited,
        1,
        "Goal",
        TARGET_TEXT,
        &TfidfScorer,
    );

    assert!(selected.is_none());
    assert_eq!(visited.cost("Start"), Some(0));
}

#[test]
fn test_stop_word_titles_fall_back_to_first_five_unscored() {
    let mut visited = VisitedCosts::new("Start");
    let stop_word_links = links(&["A", "About", "Above", "After", "Again", "All", "Also"]);

    let selected = expand_neighbors(&stop_word_links, &mut visited, 1, "Goal", "", &TfidfScorer)
        .expect("fallback candidates");

    let titles: Vec<&str> = selected.iter().map(|(title, _)| title.as_str()).collect();
    assert_eq!(titles, vec!["A", "About", "Above", "After", "Again"]);
    assert!(selected.iter().all(|(_, score)| *score == 0.0));
    assert_eq!(visited.len(), 8);
}

#[test]
fn test_retains_ten_percent_in_descending_score_order() {
    let mut visited = VisitedCosts::new("Start");
    let mut candidates: Vec<String> = (0..18).map(|i| format!("Unrelated {}", i)).collect();
    candidates.push("Wrought iron".to_string());
    candidates.push("Eiffel Tower lattice tower Paris".to_string());
    let link_set: BTreeSet<String> = candidates.into_iter().collect();

    let selected = expand_neighbors(&link_set, &mut visited, 1, "Goal", TARGET_TEXT, &TfidfScorer)
        .expect("admissible links");

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].0, "Eiffel Tower lattice tower Paris");
    assert_eq!(selected[1].0, "Wrought iron");
    assert!(selected[0].1 >= selected[1].1);
}

#[test]
fn test_tied_scores_keep_lexicographically_first_links() {
    let mut visited = VisitedCosts::new("Start");
    let numbered: Vec<String> = (0..11).map(|i| format!("Moon {:02}", i)).collect();
    let numbered: BTreeSet<String> = numbered.into_iter().collect();

    let selected = expand_neighbors(&numbered, &mut visited, 1, "Goal", "moon", &TfidfScorer)
        .expect("eleven admissible links");

    let titles: Vec<&str> = selected.iter().map(|(title, _)| title.as_str()).collect();
    assert_eq!(titles, ["Moon 00", "Moon 01"]);
    assert_eq!(selected[0].1, selected[1].1);
    assert!(selected[0].1 > 0.0);
}
