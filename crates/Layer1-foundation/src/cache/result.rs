//! Highlight result cache
//!
//! Bounded key -> markup store shared by every in-flight highlight request.
//! All bookkeeping happens under one internal lock, so byte accounting stays
//! consistent no matter how many tasks insert concurrently. The lock is
//! never held across an await point; get and insert are synchronous.

use parking_lot::Mutex;
use tracing::trace;

use crate::cache::key::CacheKey;
use crate::cache::lru::{LruStore, LruStoreConfig};
use crate::config::ResultCacheConfig;

/// Shared cache of rendered highlight fragments
///
/// Only successfully rendered markup belongs here; fallback fragments are
/// never inserted. Lookups match exact keys only.
#[derive(Debug)]
pub struct ResultCache {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    store: LruStore<CacheKey, String>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    pub fn new(config: &ResultCacheConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: LruStore::new(LruStoreConfig {
                    max_entries: config.max_entries,
                    max_bytes: config.max_bytes,
                    max_entry_bytes: config.max_entry_bytes,
                }),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Look up stored markup, updating recency
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut inner = self.inner.lock();
        match inner.store.get(key) {
            Some(markup) => {
                let markup = markup.clone();
                inner.hits += 1;
                trace!(%key, "highlight cache hit");
                Some(markup)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Store rendered markup under its pre-render key
    pub fn insert(&self, key: CacheKey, markup: String, size_bytes: usize) {
        let mut inner = self.inner.lock();
        if !inner.store.insert(key, markup, size_bytes) {
            trace!(%key, size_bytes, "highlight fragment too large to cache");
        }
    }

    /// Snapshot of cache occupancy and hit/miss counters
    pub fn stats(&self) -> ResultCacheStats {
        let inner = self.inner.lock();
        ResultCacheStats {
            entries: inner.store.len(),
            total_bytes: inner.store.current_bytes(),
            max_bytes: inner.store.max_bytes(),
            hits: inner.hits,
            misses: inner.misses,
        }
    }

    /// Drop all entries, keeping the hit/miss counters
    pub fn clear(&self) {
        self.inner.lock().store.clear();
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCacheStats {
    pub entries: usize,
    pub total_bytes: usize,
    pub max_bytes: usize,
    pub hits: u64,
    pub misses: u64,
}
