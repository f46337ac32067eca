//! PokeAPI Client
//!
//! Every typed fetch goes through one fetch-or-populate routine: serve from
//! the cache when the URL is present, otherwise fetch, decode, and write the
//! re-encoded value back with [`CACHE_TTL`].

use std::sync::Arc;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::{CacheStore, CACHE_TTL};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationPage, Pokemon};

/// Read-through client over the PokeAPI.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// The underlying HTTP client
    http: Client,
    /// Response cache shared with every other fetch in the process
    cache: Arc<CacheStore>,
    /// API base URL, without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from configuration and a shared cache.
    ///
    /// The configured request timeout bounds every network round-trip.
    pub fn new(config: &Config, cache: Arc<CacheStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the cache this client reads through.
    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    // == URL Helpers ==

    /// URL of the first page of the location listing.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location/", self.base_url)
    }

    /// URL of the first page of the location-area listing.
    pub fn first_location_area_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single creature.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch Or Populate ==
    /// Fetches `url` and decodes it as `T`, reading through the cache.
    ///
    /// A cached payload that fails to decode is returned as
    /// [`PokedexError::Decode`] without falling back to the network; the key
    /// stays unusable until something overwrites it. Failing to re-encode the
    /// fetched value only skips the cache write.
    pub async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if url.is_empty() {
            return Err(PokedexError::InvalidRequest(
                "URL must not be empty".to_string(),
            ));
        }

        if let Some(payload) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(serde_json::from_slice(&payload)?);
        }

        debug!(url, "Cache miss, fetching from API");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let value: T = serde_json::from_slice(&body)?;

        match serde_json::to_vec(&value) {
            Ok(encoded) => self.cache.set(url, encoded, CACHE_TTL),
            Err(err) => warn!(url, error = %err, "Skipping cache write, response did not re-encode"),
        }

        Ok(value)
    }

    // == Typed Fetches ==

    /// Fetches a page of the location listing.
    pub async fn location_page(&self, url: &str) -> Result<LocationPage> {
        self.fetch(url).await
    }

    /// Fetches a page of the location-area listing.
    pub async fn location_area_page(&self, url: &str) -> Result<LocationPage> {
        self.fetch(url).await
    }

    /// Fetches the details of the named location area.
    pub async fn area_details(&self, name: &str) -> Result<LocationArea> {
        let url = self.location_area_url(require_name(name, "location area")?);
        self.fetch(&url).await
    }

    /// Fetches the details of the named creature.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.pokemon_url(require_name(name, "pokemon")?);
        self.fetch(&url).await
    }
}

fn require_name<'a>(name: &'a str, kind: &str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PokedexError::InvalidRequest(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(name)
}
