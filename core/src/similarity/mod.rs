mod stop_words;

use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use stop_words::is_stop_word;

/// Outcome of scoring a batch of candidates against a reference text.
#[derive(Debug, Clone, PartialEq)]
pub enum Scores {
    /// One cosine similarity per candidate, in candidate order
    Ranked(Vec<f32>),
    /// No usable vocabulary in the batch; callers fall back to arbitrary order
    Fallback,
}

pub trait SimilarityScorer {
    fn score(&self, reference_text: &str, candidates: &[String]) -> Scores;
}

/// TF-IDF vectors over the joint corpus of the reference text and the
/// candidates, compared by cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfScorer;

type TermCounts = FxHashMap<String, u32>;
type TermVector = FxHashMap<String, f64>;

impl SimilarityScorer for TfidfScorer {
    fn score(&self, reference_text: &str, candidates: &[String]) -> Scores {
        let documents: Vec<TermCounts> = std::iter::once(reference_text)
            .chain(candidates.iter().map(String::as_str))
            .map(count_terms)
            .collect();

        let document_frequencies = document_frequencies(&documents);
        if document_frequencies.is_empty() {
            return Scores::Fallback;
        }

        let document_count = documents.len() as f64;
        let idf: FxHashMap<&str, f64> = document_frequencies
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + document_count) / (1.0 + df as f64)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        let mut vectors = documents.iter().map(|counts| weigh_terms(counts, &idf));
        let reference_vector = vectors.next().unwrap_or_default();

        let scores = vectors
            .map(|candidate_vector| cosine_similarity(&reference_vector, &candidate_vector))
            .collect();

        Scores::Ranked(scores)
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    clean_str(text)
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn count_terms(text: &str) -> TermCounts {
    let mut counts = TermCounts::default();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn document_frequencies(documents: &[TermCounts]) -> FxHashMap<&str, u32> {
    let mut frequencies = FxHashMap::default();
    for counts in documents {
        for term in counts.keys() {
            *frequencies.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    frequencies
}

fn weigh_terms(counts: &TermCounts, idf: &FxHashMap<&str, f64>) -> TermVector {
    let mut vector: TermVector = counts
        .iter()
        .map(|(term, &count)| {
            let weight = count as f64 * idf.get(term.as_str()).copied().unwrap_or(0.0);
            (term.clone(), weight)
        })
        .collect();

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

// Both vectors are unit length (or empty), so the dot product is the cosine.
fn cosine_similarity(reference: &TermVector, candidate: &TermVector) -> f32 {
    let (smaller, larger) = if reference.len() <= candidate.len() {
        (reference, candidate)
    } else {
        (candidate, reference)
    };

    let dot: f64 = smaller
        .iter()
        .filter_map(|(term, weight)| larger.get(term).map(|other| weight * other))
        .sum();

    dot.clamp(0.0, 1.0) as f32
}
