//! Byte-accounted LRU store
//!
//! Backing store for the highlight result cache. Every entry carries its
//! size in bytes; inserts evict least-recently-used entries until the
//! configured byte budget holds again. Eviction order is strict LRU by
//! access counter, which makes it deterministic and bounded.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

/// Limits for an [`LruStore`]
#[derive(Debug, Clone)]
pub struct LruStoreConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Total byte budget across all entries
    pub max_bytes: usize,
    /// Maximum size per entry in bytes (0 = unlimited)
    pub max_entry_bytes: usize,
}

impl Default for LruStoreConfig {
    fn default() -> Self {
        Self {
            max_entries: 500,
            max_bytes: 4 * 1024 * 1024,
            max_entry_bytes: 0,
        }
    }
}

/// LRU store with byte accounting
///
/// Invariant: after any `insert` returns, the tracked total never exceeds
/// `max_bytes`. Entries that could never fit (larger than the whole budget,
/// or larger than `max_entry_bytes` when set) are rejected instead of
/// flushing the rest of the store.
#[derive(Debug)]
pub struct LruStore<K, V> {
    entries: HashMap<K, StoreEntry<V>>,
    config: LruStoreConfig,
    /// Monotonic counter stamped on every access, drives eviction order
    access_counter: u64,
    current_bytes: usize,
}

#[derive(Debug)]
struct StoreEntry<V> {
    value: V,
    size_bytes: usize,
    last_access: u64,
    created_at: Instant,
}

impl<K: Eq + Hash + Clone, V> LruStore<K, V> {
    pub fn new(config: LruStoreConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            access_counter: 0,
            current_bytes: 0,
        }
    }

    /// Get a reference to a stored value, updating its recency
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.access_counter += 1;
        let counter = self.access_counter;
        self.entries.get_mut(key).map(|entry| {
            entry.last_access = counter;
            &entry.value
        })
    }

    /// Check for a key without updating recency
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a value with a known size
    ///
    /// Returns `false` if the entry was rejected for exceeding a size limit.
    pub fn insert(&mut self, key: K, value: V, size_bytes: usize) -> bool {
        if size_bytes > self.config.max_bytes {
            return false;
        }
        if self.config.max_entry_bytes > 0 && size_bytes > self.config.max_entry_bytes {
            return false;
        }

        self.access_counter += 1;

        if let Some(entry) = self.entries.get_mut(&key) {
            let old_size = entry.size_bytes;
            entry.value = value;
            entry.size_bytes = size_bytes;
            entry.last_access = self.access_counter;
            self.current_bytes = self.current_bytes.saturating_sub(old_size);
        } else {
            while self.entries.len() >= self.config.max_entries {
                self.evict_lru();
            }
            self.entries.insert(
                key,
                StoreEntry {
                    value,
                    size_bytes,
                    last_access: self.access_counter,
                    created_at: Instant::now(),
                },
            );
        }

        while self.current_bytes + size_bytes > self.config.max_bytes {
            self.evict_lru();
        }
        self.current_bytes += size_bytes;
        true
    }

    /// Remove a specific key
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| {
            self.current_bytes = self.current_bytes.saturating_sub(entry.size_bytes);
            entry.value
        })
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total tracked bytes
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }

    /// Configured byte budget
    pub fn max_bytes(&self) -> usize {
        self.config.max_bytes
    }

    /// Age of the oldest entry, if any
    pub fn oldest_entry_age(&self) -> Option<std::time::Duration> {
        self.entries
            .values()
            .map(|entry| entry.created_at.elapsed())
            .max()
    }

    fn evict_lru(&mut self) {
        let lru_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());

        if let Some(key) = lru_key {
            if let Some(entry) = self.entries.remove(&key) {
                self.current_bytes = self.current_bytes.saturating_sub(entry.size_bytes);
            }
        }
    }
}
