//! Cache Store Module
//!
//! Key-addressed store of expiring payloads, safe for concurrent use.
//!
//! Expiration is lazy: `get` never checks it, and stale entries are only
//! purged by the sweep that runs at the end of every `set`, on any key.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::debug;

use crate::cache::CacheEntry;

/// One entry behind its own lock, so readers and in-place writers of
/// different keys never contend.
type Slot = Arc<RwLock<CacheEntry>>;

// == Cache Store ==
/// Concurrent map from key to expiring payload.
///
/// Lock order is always map, then entry. `get` and in-place `set` take the
/// map lock shared; inserting a new key and sweeping take it exclusively.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: RwLock<HashMap<String, Slot>>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store. The backing map allocates on first insert.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, then removes every expired
    /// entry in the store.
    ///
    /// Replacing an existing key swaps payload and expiry together under the
    /// entry's write lock, so a concurrent `get` never sees a torn pair.
    pub fn set(&self, key: impl Into<String>, payload: Vec<u8>, ttl: Duration) {
        let key = key.into();
        let entry = CacheEntry::new(payload, ttl);

        let pending = {
            let map = read(&self.entries);
            match map.get(&key) {
                Some(slot) => {
                    *write(slot) = entry;
                    None
                }
                None => Some(entry),
            }
        };

        if let Some(entry) = pending {
            let mut map = write(&self.entries);
            match map.entry(key) {
                // Another writer created the key between the two locks
                Entry::Occupied(slot) => *write(slot.get()) = entry,
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(RwLock::new(entry)));
                }
            }
        }

        let removed = self.sweep_expired();
        if removed > 0 {
            debug!(removed, "Cache sweep removed expired entries");
        }
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Expiration is not checked here: an entry past its TTL is still
    /// returned until some later `set` sweeps it away.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let map = read(&self.entries);
        let slot = map.get(key)?;
        let entry = read(slot);
        Some(entry.payload().to_vec())
    }

    // == Length ==
    /// Returns the number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        read(&self.entries).is_empty()
    }

    /// Removes all expired entries and returns how many were dropped.
    fn sweep_expired(&self) -> usize {
        let mut map = write(&self.entries);
        let before = map.len();
        map.retain(|_, slot| !read(slot).is_expired());
        before - map.len()
    }
}

// Guarded data is replaced whole, never left half-written, so a poisoned
// lock still holds a consistent value.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
