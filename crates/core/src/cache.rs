//! Bounded LRU set of previously active module instances.
//!
//! Index 0 is the least recently used entry, the tail the most recent one.
//! The active module is never cached: it is taken out when entered and put
//! back when left.

use indexmap::IndexMap;
use sitekit_api::Handler;
use std::sync::Arc;

pub struct InstanceCache {
    capacity: usize,
    entries: IndexMap<String, Arc<dyn Handler>>,
}

impl InstanceCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `handler` as the most recent entry, replacing any entry with the
    /// same key. Returns the entries evicted to stay within capacity.
    pub fn put(&mut self, handler: Arc<dyn Handler>) -> Vec<Arc<dyn Handler>> {
        let key = handler.name().to_string();
        self.entries.shift_remove(&key);

        let mut evicted = Vec::new();
        if self.capacity == 0 {
            evicted.push(handler);
            return evicted;
        }

        while self.entries.len() >= self.capacity {
            match self.entries.shift_remove_index(0) {
                Some((old_key, old)) => {
                    tracing::debug!("Evicted '{}' from instance cache", old_key);
                    evicted.push(old);
                }
                None => break,
            }
        }

        self.entries.insert(key, handler);
        evicted
    }

    /// Removes and returns the cached instance for `key`, if any.
    pub fn take(&mut self, key: &str) -> Option<Arc<dyn Handler>> {
        self.entries.shift_remove(key)
    }

    /// Looks up `key` without changing recency.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Handler>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Cached keys, least recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
