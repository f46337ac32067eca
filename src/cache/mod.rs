//! Cache Module
//!
//! Process-local response cache keyed by request URL, with per-entry TTL
//! and lazy eviction of stale entries.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Lifetime of every response the API client writes back to the cache.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);
