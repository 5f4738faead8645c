use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::FilmRecord;

/// Public film catalog queried on startup.
pub const DEFAULT_CATALOG_URL: &str = "https://swapi.dev/api/films/?format=json";

/// Everything that can go wrong while loading the catalog. Callers log it and
/// carry on with an empty list.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to start the fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Response envelope; only `results` is of interest.
#[derive(Deserialize)]
struct FilmEnvelope {
    results: Vec<FilmRecord>,
}

/// Decode a catalog response body into film records.
pub fn decode_films(body: &str) -> Result<Vec<FilmRecord>, FetchFailure> {
    let envelope: FilmEnvelope = serde_json::from_str(body)?;
    Ok(envelope.results)
}

/// HTTP client for the film catalog endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a single GET and decode the `results` array. Non-success status
    /// codes count as failures. There is no retry and no timeout.
    pub async fn fetch_all(&self) -> Result<Vec<FilmRecord>, FetchFailure> {
        debug!(url = %self.url, "requesting film catalog");
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let films = decode_films(&body)?;
        info!(count = films.len(), "film catalog received");
        Ok(films)
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}
