//! Bounded decoration cache.
//!
//! A least-recently-used map from [`CacheKey`] to the decorated name. Reads
//! refresh recency; once `capacity` entries are held, inserting a new key
//! evicts the entry that was read or inserted longest ago. Values for a key
//! are never overwritten: the first decoration stays until the entry is
//! evicted or the cache is cleared.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::types::CacheKey;

/// What [`DecorationCache::get_or_insert_with`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The key was already cached.
    Hit(String),
    /// The key was computed and stored.
    Inserted {
        /// The stored value.
        value: String,
        /// Whether storing it pushed out the least recently used entry.
        evicted: bool,
    },
    /// The computation declined to produce a cacheable value.
    Skipped,
}

/// Thread-safe LRU cache of decorated names.
pub struct DecorationCache {
    inner: Mutex<LruCache<CacheKey, String>>,
}

impl DecorationCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached value for `key`, refreshing its recency.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.inner.lock().get(key).cloned()
    }

    /// Return the cached value, or run `compute` and store what it returns.
    ///
    /// The lock is held across the whole check-compute-insert sequence, so
    /// concurrent callers never compute the same key twice. `compute` must
    /// not call back into this cache.
    pub fn get_or_insert_with<F>(&self, key: CacheKey, compute: F) -> CacheOutcome
    where
        F: FnOnce(&CacheKey) -> Option<String>,
    {
        let mut cache = self.inner.lock();
        if let Some(value) = cache.get(&key) {
            return CacheOutcome::Hit(value.clone());
        }

        match compute(&key) {
            Some(value) => {
                // Key is known absent, so any pushed-out pair is an eviction.
                let evicted = cache.push(key, value.clone()).is_some();
                CacheOutcome::Inserted { value, evicted }
            }
            None => CacheOutcome::Skipped,
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}

impl Default for DecorationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for DecorationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("DecorationCache")
            .field("len", &cache.len())
            .field("capacity", &cache.cap())
            .finish()
    }
}
