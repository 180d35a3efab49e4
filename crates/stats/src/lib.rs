//! Catalog analytics: pure, deterministic functions over a snapshot.
//!
//! Everything here takes the mapping returned by the store's `list()` (or
//! a rating slice derived from it) and has no side effects and no hidden
//! state. Empty input yields `None` rather than a fault, so callers get
//! the guard for free from the type.

use movielog_core::{Catalog, MovieEntry};

/// Maximum and minimum rating with every title achieving each.
///
/// Tie handling is deliberate: two movies sharing the top rating are both
/// "best", and both titles are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub best_rating: f64,
    pub best_titles: Vec<String>,
    pub worst_rating: f64,
    pub worst_titles: Vec<String>,
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Standard median: middle value, or the mean of the two middle values
/// for an even-sized input. `None` for an empty slice.
#[must_use]
pub fn median(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let mut sorted = ratings.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Best and worst ratings with all tied titles, or `None` for an empty
/// catalog. Titles come back in the snapshot's (alphabetical) order.
#[must_use]
pub fn extremes(catalog: &Catalog) -> Option<Extremes> {
    let mut ratings = catalog.values().map(|entry| entry.rating);
    let first = ratings.next()?;
    let (max, min) = ratings.fold((first, first), |(max, min), r| {
        (
            if r.total_cmp(&max).is_gt() { r } else { max },
            if r.total_cmp(&min).is_lt() { r } else { min },
        )
    });

    let mut best_titles = Vec::new();
    let mut worst_titles = Vec::new();
    for (title, entry) in catalog {
        if entry.rating == max {
            best_titles.push(title.clone());
        }
        if entry.rating == min {
            worst_titles.push(title.clone());
        }
    }

    Some(Extremes { best_rating: max, best_titles, worst_rating: min, worst_titles })
}

/// Snapshot entries sorted by rating, highest first. The sort is stable,
/// so equal ratings keep the snapshot's alphabetical order.
#[must_use]
pub fn sorted_by_rating(catalog: &Catalog) -> Vec<(String, MovieEntry)> {
    let mut items: Vec<(String, MovieEntry)> =
        catalog.iter().map(|(t, e)| (t.clone(), e.clone())).collect();
    items.sort_by(|a, b| b.1.rating.total_cmp(&a.1.rating));
    items
}

/// Case-insensitive substring search over titles.
#[must_use]
pub fn search_titles(catalog: &Catalog, query: &str) -> Vec<(String, MovieEntry)> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&needle))
        .map(|(t, e)| (t.clone(), e.clone()))
        .collect()
}
