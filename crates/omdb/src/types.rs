use serde::Deserialize;

/// Normalized lookup result on our own scale: year as a plain integer,
/// rating in [0, 10], poster absent when OMDb has none.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLookup {
    pub title: String,
    pub year: i64,
    pub rating: f64,
    pub poster_url: Option<String>,
}

/// Raw OMDb response body. All fields are strings on the wire, including
/// year and rating; "N/A" stands in for missing values.
#[derive(Debug, Deserialize)]
pub(crate) struct OmdbPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// First four digits of the wire year ("1999", "2019-2023"), else 0.
pub(crate) fn normalize_year(raw: &str) -> i64 {
    let head: String = raw.trim().chars().take(4).collect();
    if head.len() == 4 && head.chars().all(|c| c.is_ascii_digit()) {
        head.parse().unwrap_or(0)
    } else {
        0
    }
}

/// imdbRating as f64; "N/A", missing or unparsable becomes 0.0.
pub(crate) fn normalize_rating(raw: Option<&str>) -> f64 {
    match raw {
        Some("N/A") | None => 0.0,
        Some(s) => s.trim().parse().unwrap_or(0.0),
    }
}

/// Poster address; "N/A" and empty collapse to `None`.
pub(crate) fn normalize_poster(raw: Option<String>) -> Option<String> {
    match raw.as_deref() {
        Some("N/A") | Some("") | None => None,
        Some(_) => raw,
    }
}
