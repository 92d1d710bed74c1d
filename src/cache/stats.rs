//! Cache Statistics Module
//!
//! Tracks per-operation counters and lookup outcomes.

use serde::Serialize;

// == Stats Recorder ==
/// Operation counters owned by the cache engine.
///
/// `*_ops` count calls, while `hits` and `misses` classify the outcome of
/// each lookup. Counters only ever grow.
#[derive(Debug, Clone, Default)]
pub struct StatsRecorder {
    hits: u64,
    misses: u64,
    set_ops: u64,
    get_ops: u64,
    delete_ops: u64,
}

impl StatsRecorder {
    // == Constructor ==
    /// Creates a new recorder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_set(&mut self) {
        self.set_ops += 1;
    }

    pub fn record_get(&mut self) {
        self.get_ops += 1;
    }

    pub fn record_delete(&mut self) {
        self.delete_ops += 1;
    }

    // == Read ==
    /// Copies the counters into a snapshot alongside live store figures.
    pub fn read(&self, total_keys: usize, capacity: usize) -> CacheStats {
        CacheStats {
            total_keys,
            capacity,
            hits: self.hits,
            misses: self.misses,
            set_ops: self.set_ops,
            get_ops: self.get_ops,
            delete_ops: self.delete_ops,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently held
    pub total_keys: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    pub set_ops: u64,
    pub get_ops: u64,
    pub delete_ops: u64,
}
