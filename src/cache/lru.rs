//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for cache eviction.

/// Null link marker for the arena list.
const NIL: usize = usize::MAX;

/// Handle to a key's position in a [`RecencyList`].
pub type Handle = usize;

#[derive(Debug)]
struct Node {
    key: String,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in a vector of nodes linked by index, with vacated slots kept on
/// a free list for reuse:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Every operation is O(1). Handles returned by [`RecencyList::push_front`]
/// stay valid until the key is removed or popped.
#[derive(Debug)]
pub struct RecencyList {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Front ==
    /// Inserts a key as the most recently used and returns its handle.
    pub fn push_front(&mut self, key: String) -> Handle {
        let node = Node {
            key,
            prev: NIL,
            next: self.head,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        if self.head != NIL {
            self.node_mut(self.head).prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks a key as recently used (moves it to the head).
    pub fn touch(&mut self, handle: Handle) {
        if handle == self.head {
            return;
        }
        self.unlink(handle);

        let old_head = self.head;
        {
            let node = self.node_mut(handle);
            node.prev = NIL;
            node.next = old_head;
        }
        if old_head != NIL {
            self.node_mut(old_head).prev = handle;
        }
        self.head = handle;
    }

    // == Remove ==
    /// Removes a key from the list, returning it.
    ///
    /// # Panics
    /// Panics if `handle` does not refer to a live node.
    pub fn remove(&mut self, handle: Handle) -> String {
        self.unlink(handle);
        let node = self.nodes[handle]
            .take()
            .expect("recency handle refers to a vacant slot");
        self.free.push(handle);
        self.len -= 1;
        node.key
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<String> {
        if self.tail == NIL {
            None
        } else {
            Some(self.remove(self.tail))
        }
    }

    /// Drops every key and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn unlink(&mut self, handle: Handle) {
        let (prev, next) = {
            let node = self.node(handle);
            (node.prev, node.next)
        };

        if prev == NIL {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.node_mut(next).prev = prev;
        }
    }

    fn node(&self, idx: usize) -> &Node {
        self.nodes[idx]
            .as_ref()
            .expect("recency handle refers to a vacant slot")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.nodes[idx]
            .as_mut()
            .expect("recency handle refers to a vacant slot")
    }
}

/// MRU to LRU iterator over a [`RecencyList`].
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = self.list.node(self.cursor);
        self.cursor = node.next;
        Some(node.key.as_str())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = RecencyList::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.iter().next(), None);
    }

    #[test]
    fn test_lru_push_front() {
        let mut lru = RecencyList::new();

        lru.push_front("key1".to_string());
        lru.push_front("key2".to_string());
        lru.push_front("key3".to_string());

        assert_eq!(lru.len(), 3);
        assert_eq!(keys(&lru), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(lru.pop_back(), Some("key1".to_string()));
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = RecencyList::new();

        let k1 = lru.push_front("key1".to_string());
        lru.push_front("key2".to_string());
        lru.push_front("key3".to_string());

        lru.touch(k1);

        assert_eq!(lru.len(), 3);
        assert_eq!(keys(&lru), vec!["key1", "key3", "key2"]);
        assert_eq!(lru.pop_back(), Some("key2".to_string()));
    }

    #[test]
    fn test_lru_touch_head_is_noop() {
        let mut lru = RecencyList::new();

        lru.push_front("a".to_string());
        let b = lru.push_front("b".to_string());
        lru.touch(b);

        assert_eq!(keys(&lru), vec!["b", "a"]);
    }

    #[test]
    fn test_lru_pop_back() {
        let mut lru = RecencyList::new();

        lru.push_front("key1".to_string());
        lru.push_front("key2".to_string());
        lru.push_front("key3".to_string());

        assert_eq!(lru.pop_back(), Some("key1".to_string()));
        assert_eq!(lru.len(), 2);

        assert_eq!(lru.pop_back(), Some("key2".to_string()));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_pop_back_empty() {
        let mut lru = RecencyList::new();
        assert_eq!(lru.pop_back(), None);
    }

    #[test]
    fn test_lru_remove_middle() {
        let mut lru = RecencyList::new();

        lru.push_front("key1".to_string());
        let k2 = lru.push_front("key2".to_string());
        lru.push_front("key3".to_string());

        assert_eq!(lru.remove(k2), "key2");

        assert_eq!(lru.len(), 2);
        assert_eq!(keys(&lru), vec!["key3", "key1"]);
    }

    #[test]
    fn test_lru_remove_only_key() {
        let mut lru = RecencyList::new();

        let k = lru.push_front("solo".to_string());
        lru.remove(k);

        assert!(lru.is_empty());
        assert_eq!(lru.pop_back(), None);
        assert_eq!(lru.iter().count(), 0);
    }

    #[test]
    fn test_lru_slots_are_reused() {
        let mut lru = RecencyList::with_capacity(2);

        let a = lru.push_front("a".to_string());
        lru.push_front("b".to_string());
        lru.remove(a);
        let c = lru.push_front("c".to_string());

        assert_eq!(c, a);
        assert_eq!(keys(&lru), vec!["c", "b"]);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = RecencyList::new();

        let a = lru.push_front("a".to_string());
        let b = lru.push_front("b".to_string());
        let c = lru.push_front("c".to_string());

        lru.touch(a);
        lru.touch(c);
        lru.touch(b);

        // head=[b, c, a]=tail
        assert_eq!(lru.pop_back(), Some("a".to_string()));
        assert_eq!(lru.pop_back(), Some("c".to_string()));
        assert_eq!(lru.pop_back(), Some("b".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = RecencyList::new();

        lru.push_front("a".to_string());
        lru.push_front("b".to_string());
        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.pop_back(), None);

        lru.push_front("c".to_string());
        assert_eq!(keys(&lru), vec!["c"]);
    }
}
