//! Autocomplete over stored names.
//!
//! A candidate scores the better of its whole-string similarity to the query and the best
//! similarity of any equal-length window (weighted down slightly), so "united" still finds
//! "Man United".

use strsim::normalized_levenshtein;

pub const MIN_SCORE: u32 = 60;
pub const MAX_RESULTS: usize = 10;

const PARTIAL_WEIGHT: f64 = 0.9;

/// Similarity of `query` and `candidate` on a 0..=100 scale, ignoring case.
pub fn similarity(query: &str, candidate: &str) -> u32 {
    let query = query.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();

    if query.is_empty() || candidate.is_empty() {
        return 0;
    }

    let full = normalized_levenshtein(&query, &candidate);
    let partial = best_window(&query, &candidate) * PARTIAL_WEIGHT;

    (full.max(partial) * 100.0).round() as u32
}

fn best_window(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let long: Vec<char> = long.chars().collect();
    let width = short.chars().count();

    if width == long.len() {
        return normalized_levenshtein(short, &long.iter().collect::<String>());
    }

    long.windows(width)
        .map(|w| normalized_levenshtein(short, &w.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

/// Names scoring at least [`MIN_SCORE`], best first, at most [`MAX_RESULTS`].
pub fn fuzzy_search(query: &str, candidates: &[String]) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &String)> = candidates
        .iter()
        .map(|name| (similarity(query, name), name))
        .filter(|(score, _)| *score >= MIN_SCORE)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(_, name)| name.clone())
        .collect()
}
