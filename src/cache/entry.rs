//! Cache Entry Module
//!
//! Defines a single cached payload together with its expiration instant.

use std::time::{Duration, Instant};

/// Expiry used when `now + ttl` is not representable as an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A cached response body and the instant after which it is stale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw payload bytes
    payload: Vec<u8>,
    /// Expiration instant, fixed at creation and never extended by reads
    expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now.
    ///
    /// # Arguments
    /// * `payload` - The bytes to store
    /// * `ttl` - How long the entry stays fresh
    pub fn new(payload: Vec<u8>, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);

        Self {
            payload,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current instant is strictly after its
    /// expiration instant.
    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    /// Returns the payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the expiration instant.
    pub(crate) fn expires_at(&self) -> Instant {
        self.expires_at
    }
}
