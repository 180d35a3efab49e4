//! Typed error enum for the lookup client.

use thiserror::Error;

/// Errors from OMDb lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no match for title: {0}")]
    NoMatch(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LookupError {
    /// Whether the API could not be reached at all (network failure,
    /// timeout, server-side error) as opposed to a well-formed "no such
    /// title" answer.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}
