//! Cache Module
//!
//! Provides an in-memory key-value cache with LRU eviction and operation statistics.

mod engine;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use engine::{validate_key, CacheEngine};
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use stats::{CacheStats, StatsRecorder};
pub use store::EntryStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Longest accepted TTL in seconds (ten years)
pub const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;
