//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL of the remote API.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The cache TTL is deliberately absent: see [`crate::cache::CACHE_TTL`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,
    /// Timeout in seconds for a single HTTP request
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout: env::var("POKEDEX_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Returns the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
        }
    }
}
