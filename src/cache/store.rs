//! Entry Store Module
//!
//! Bounded key-value storage combining a HashMap with LRU recency tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::lru::{Handle, RecencyList};
use crate::cache::CacheEntry;

#[derive(Debug)]
struct Slot {
    handle: Handle,
    entry: CacheEntry,
}

// == Entry Store ==
/// Fixed-capacity key-value storage with LRU eviction.
///
/// Every key in the map has exactly one node in the recency list and vice
/// versa. Snapshots are ordered from most to least recently used.
///
/// A capacity of zero is valid: every `put` of a new key evicts that key
/// straight away, so the store stays empty.
#[derive(Debug)]
pub struct EntryStore {
    /// Key-value storage
    entries: HashMap<String, Slot>,
    /// LRU access order
    order: RecencyList,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
        }
    }

    // == Put ==
    /// Inserts or overwrites a key, making it the most recently used.
    ///
    /// Overwriting never evicts. Inserting a new key into a full store evicts
    /// the least recently used entry first. Returns the evicted key, if any.
    pub fn put(&mut self, key: String, value: String, ttl: Option<Duration>) -> Option<String> {
        let entry = CacheEntry::new(value, ttl);

        if let Some(slot) = self.entries.get_mut(&key) {
            slot.entry = entry;
            self.order.touch(slot.handle);
            return None;
        }

        if self.capacity == 0 {
            debug!(key = %key, "zero-capacity store dropped inserted key");
            return Some(key);
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let handle = self.order.push_front(key.clone());
        self.entries.insert(key, Slot { handle, entry });
        self.check_invariants();

        evicted
    }

    // == Get ==
    /// Looks up a key, promoting it to most recently used on a hit.
    ///
    /// A miss leaves the ordering untouched. An expired entry is removed and
    /// reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let slot = self.entries.get(key)?;

        if slot.entry.is_expired() {
            debug!(key = %key, "dropping expired entry on read");
            self.delete(key);
            return None;
        }

        self.order.touch(slot.handle);
        Some(slot.entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(slot) => {
                self.order.remove(slot.handle);
                true
            }
            None => false,
        }
    }

    // == Snapshot ==
    /// Returns live `(key, value)` pairs from most to least recently used.
    ///
    /// Does not change the recency order.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let now = Instant::now();
        self.order
            .iter()
            .filter_map(|key| {
                let slot = self.entries.get(key)?;
                if slot.entry.is_expired_at(now) {
                    return None;
                }
                Some((key.to_string(), slot.entry.value.clone()))
            })
            .collect()
    }

    /// Returns live keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        let now = Instant::now();
        self.order
            .iter()
            .filter(|key| {
                self.entries
                    .get(*key)
                    .is_some_and(|slot| !slot.entry.is_expired_at(now))
            })
            .map(str::to_string)
            .collect()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, slot)| slot.entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.delete(key);
        }
        expired.len()
    }

    /// Drops every entry, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        removed
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_lru(&mut self) -> Option<String> {
        let key = self.order.pop_back()?;
        self.entries.remove(&key);
        debug!(key = %key, "evicted least recently used entry");
        Some(key)
    }

    fn check_invariants(&self) {
        assert!(
            self.entries.len() <= self.capacity,
            "store holds {} entries with capacity {}",
            self.entries.len(),
            self.capacity
        );
        assert_eq!(
            self.entries.len(),
            self.order.len(),
            "entry map and recency list diverged"
        );
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn put_kv(store: &mut EntryStore, key: &str, value: &str) -> Option<String> {
        store.put(key.to_string(), value.to_string(), None)
    }

    fn snapshot_keys(store: &EntryStore) -> Vec<String> {
        store.snapshot().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_store_new() {
        let store = EntryStore::new(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = EntryStore::new(100);

        put_kv(&mut store, "key1", "value1");

        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = EntryStore::new(100);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_miss_keeps_order() {
        let mut store = EntryStore::new(3);

        put_kv(&mut store, "a", "1");
        put_kv(&mut store, "b", "2");
        let _ = store.get("zzz");

        assert_eq!(snapshot_keys(&store), vec!["b", "a"]);
    }

    #[test]
    fn test_store_delete() {
        let mut store = EntryStore::new(100);

        put_kv(&mut store, "key1", "value1");

        assert!(store.delete("key1"));
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store = EntryStore::new(100);
        put_kv(&mut store, "key1", "value1");

        assert!(!store.delete("ghost"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_does_not_evict() {
        let mut store = EntryStore::new(1);

        assert_eq!(put_kv(&mut store, "x", "v1"), None);
        assert_eq!(put_kv(&mut store, "x", "v2"), None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("x"), Some("v2".to_string()));
    }

    #[test]
    fn test_store_overwrite_promotes_key() {
        let mut store = EntryStore::new(2);

        put_kv(&mut store, "a", "1");
        put_kv(&mut store, "b", "2");
        put_kv(&mut store, "a", "3");
        let evicted = put_kv(&mut store, "c", "4");

        assert_eq!(evicted, Some("b".to_string()));
        assert_eq!(snapshot_keys(&store), vec!["c", "a"]);
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = EntryStore::new(3);

        put_kv(&mut store, "key1", "value1");
        put_kv(&mut store, "key2", "value2");
        put_kv(&mut store, "key3", "value3");

        // Store is full, adding key4 should evict key1 (oldest)
        let evicted = put_kv(&mut store, "key4", "value4");

        assert_eq!(evicted, Some("key1".to_string()));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("key1"), None);
        assert!(store.get("key2").is_some());
        assert!(store.get("key3").is_some());
        assert!(store.get("key4").is_some());
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = EntryStore::new(3);

        put_kv(&mut store, "key1", "value1");
        put_kv(&mut store, "key2", "value2");
        put_kv(&mut store, "key3", "value3");

        // Access key1 to make it most recently used
        store.get("key1").unwrap();

        // Adding key4 should evict key2 (now oldest)
        assert_eq!(put_kv(&mut store, "key4", "value4"), Some("key2".to_string()));
        assert!(store.get("key1").is_some());
        assert_eq!(store.get("key2"), None);
    }

    #[test]
    fn test_store_zero_capacity() {
        let mut store = EntryStore::new(0);

        assert_eq!(put_kv(&mut store, "a", "1"), Some("a".to_string()));
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_store_snapshot_order() {
        let mut store = EntryStore::new(2);

        put_kv(&mut store, "a", "1");
        put_kv(&mut store, "b", "2");
        store.get("a");
        put_kv(&mut store, "c", "3");

        assert_eq!(
            store.snapshot(),
            vec![
                ("c".to_string(), "3".to_string()),
                ("a".to_string(), "1".to_string()),
            ]
        );
        assert_eq!(store.keys(), vec!["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_store_clear() {
        let mut store = EntryStore::new(10);

        put_kv(&mut store, "a", "1");
        put_kv(&mut store, "b", "2");

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());

        put_kv(&mut store, "c", "3");
        assert_eq!(store.get("c"), Some("3".to_string()));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = EntryStore::new(100);

        store.put("key1".to_string(), "value1".to_string(), Some(Duration::from_millis(50)));

        // Should be accessible immediately
        assert!(store.get("key1").is_some());

        sleep(Duration::from_millis(80));

        assert_eq!(store.get("key1"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_snapshot_skips_expired() {
        let mut store = EntryStore::new(100);

        store.put("short".to_string(), "v".to_string(), Some(Duration::from_millis(30)));
        put_kv(&mut store, "forever", "v");

        sleep(Duration::from_millis(60));

        assert_eq!(snapshot_keys(&store), vec!["forever"]);
        assert_eq!(store.keys(), vec!["forever".to_string()]);
        // Not yet reclaimed until a read or purge
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_purge_expired() {
        let mut store = EntryStore::new(100);

        store.put("key1".to_string(), "value1".to_string(), Some(Duration::from_millis(30)));
        store.put("key2".to_string(), "value2".to_string(), Some(Duration::from_secs(10)));

        sleep(Duration::from_millis(60));

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key2").is_some());
    }
}
