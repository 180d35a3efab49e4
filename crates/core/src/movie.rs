use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A full movie record as stored in the catalog.
///
/// `title` acts as the primary key in practice: lookups, updates and
/// deletes match it exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i64,
    /// Expected in [0, 10]; not enforced by the storage layer.
    pub rating: f64,
    pub poster_url: Option<String>,
}

/// Per-title catalog entry, the value side of a [`Catalog`] snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub year: i64,
    pub rating: f64,
    pub poster_url: Option<String>,
}

/// Snapshot of the whole catalog: title -> entry.
///
/// A `BTreeMap` gives stable (alphabetical) iteration, which keeps list
/// output and analytics tie-breaking deterministic.
pub type Catalog = BTreeMap<String, MovieEntry>;
