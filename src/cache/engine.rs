//! Cache Engine Module
//!
//! Composes the entry store and statistics behind a single lock so that every
//! operation applies its store mutation and counter updates as one unit.

use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, EntryStore, StatsRecorder, MAX_KEY_LENGTH, MAX_TTL_SECS};
use crate::error::{CacheError, Result};

#[derive(Debug)]
struct EngineState {
    store: EntryStore,
    stats: StatsRecorder,
}

// == Cache Engine ==
/// Concurrency-safe cache shared by all request handlers.
///
/// Writers (set, get, delete, clear, purge) take the write lock. `stats`,
/// `all_data` and `keys` only inspect state and take the read lock.
#[derive(Debug)]
pub struct CacheEngine {
    state: RwLock<EngineState>,
}

impl CacheEngine {
    // == Constructor ==
    /// Creates an engine around an empty store of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: RwLock::new(EngineState {
                store: EntryStore::new(capacity),
                stats: StatsRecorder::new(),
            }),
        }
    }

    // == Set ==
    /// Stores a key-value pair, evicting the least recently used entry if the
    /// cache is full. `ttl` is in seconds; `None` stores without expiry.
    pub async fn set(&self, key: String, value: String, ttl: Option<u64>) -> Result<()> {
        validate_key(&key)?;
        let ttl = ttl.map(validate_ttl).transpose()?;

        let mut state = self.state.write().await;
        let evicted = state.store.put(key, value, ttl);
        state.stats.record_set();

        if let Some(evicted) = evicted {
            debug!(evicted = %evicted, "set caused eviction");
        }
        Ok(())
    }

    // == Get ==
    /// Retrieves a value, recording a hit or a miss.
    pub async fn get(&self, key: &str) -> Result<String> {
        validate_key(key)?;

        let mut state = self.state.write().await;
        state.stats.record_get();
        match state.store.get(key) {
            Some(value) => {
                state.stats.record_hit();
                Ok(value)
            }
            None => {
                state.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes a key, returning whether it was present.
    ///
    /// The call is counted even when nothing was removed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;

        let mut state = self.state.write().await;
        state.stats.record_delete();
        Ok(state.store.delete(key))
    }

    // == Stats ==
    /// Returns a consistent snapshot of the counters and store size.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        state.stats.read(state.store.len(), state.store.capacity())
    }

    // == All Data ==
    /// Returns every live entry, most recently used first.
    ///
    /// This is an inspection, not an access: recency and counters are untouched.
    pub async fn all_data(&self) -> Vec<(String, String)> {
        self.state.read().await.store.snapshot()
    }

    /// Returns every live key, most recently used first.
    pub async fn keys(&self) -> Vec<String> {
        self.state.read().await.store.keys()
    }

    /// Drops every entry. Counters are kept.
    pub async fn clear(&self) -> usize {
        self.state.write().await.store.clear()
    }

    // == Cleanup Expired ==
    /// Removes entries whose TTL has elapsed, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        self.state.write().await.store.purge_expired()
    }
}

/// Accepts TTLs between one second and [`MAX_TTL_SECS`].
fn validate_ttl(secs: u64) -> Result<Duration> {
    match secs {
        0 => Err(CacheError::InvalidRequest(
            "TTL must be a positive number of seconds".to_string(),
        )),
        secs if secs > MAX_TTL_SECS => Err(CacheError::InvalidRequest(format!(
            "TTL exceeds maximum of {} seconds",
            MAX_TTL_SECS
        ))),
        secs => Ok(Duration::from_secs(secs)),
    }
}

/// Rejects empty keys and keys longer than [`MAX_KEY_LENGTH`] bytes.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
