//! Catalog access split into the HTTP client and the one-shot fetch worker.

mod client;
mod loader;

pub use client::{decode_films, FetchFailure, HttpCatalog, DEFAULT_CATALOG_URL};
pub use loader::{FetchHandle, FetchPoll, FetchResult};
