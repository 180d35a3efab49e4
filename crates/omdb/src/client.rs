use movielog_core::env_parse_with_default;

use crate::error::LookupError;
use crate::types::{normalize_poster, normalize_rating, normalize_year, MovieLookup, OmdbPayload};

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";
/// Default request timeout in seconds (override: MOVIELOG_HTTP_TIMEOUT_SECS).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for OMDb title lookups.
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OmdbClient {
    /// Creates a new client with the given API key and base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LookupError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let timeout_secs = env_parse_with_default("MOVIELOG_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LookupError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a title and return normalized metadata.
    ///
    /// # Errors
    /// `NoMatch` when OMDb answers `Response: "False"`; `HttpRequest` /
    /// `HttpStatus` when the API is unreachable or failing; `JsonParse`
    /// on a malformed body.
    pub async fn lookup(&self, title: &str) -> Result<MovieLookup, LookupError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(LookupError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let payload: OmdbPayload =
            serde_json::from_str(&body).map_err(|e| LookupError::JsonParse {
                context: format!("OMDb response for '{title}'"),
                source: e,
            })?;

        if payload.response != "True" {
            tracing::debug!(title, reason = ?payload.error, "OMDb returned no match");
            return Err(LookupError::NoMatch(title.to_owned()));
        }

        Ok(MovieLookup {
            title: payload.title.unwrap_or_else(|| title.to_owned()),
            year: payload.year.as_deref().map(normalize_year).unwrap_or(0),
            rating: normalize_rating(payload.imdb_rating.as_deref()),
            poster_url: normalize_poster(payload.poster),
        })
    }
}
