use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::info;

/// Entry count reported by [`ResponseCache::stats`].
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub max_entries: usize,
}

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
    seq: u64,
}

struct CacheInner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    next_seq: u64,
}

/// In-memory TTL cache shared by the enrichment pipeline and other
/// response-caching callers (image results use a 24h TTL, AI text callers
/// use shorter ones; TTL is chosen per insert).
///
/// Expired entries are removed eagerly on access. When the entry count
/// exceeds `max_entries`, the oldest `evict_batch` entries by insertion
/// order are swept out. Not true LRU: reads do not refresh an entry's age.
///
/// All operations happen under one mutex, held only for the map access
/// itself and never across an await point.
pub struct ResponseCache<V> {
    inner: Mutex<CacheInner<V>>,
    max_entries: usize,
    evict_batch: usize,
}

impl<V: Clone> ResponseCache<V> {
    #[must_use]
    pub fn new(max_entries: usize, evict_batch: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                next_seq: 0,
            }),
            max_entries,
            evict_batch,
        }
    }

    /// Returns the cached value if present and not expired. An expired
    /// entry is deleted before returning `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock().expect("cache mutex poisoned");

        match inner.entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < entry.ttl => Some(entry.value.clone()),
            Some(_) => {
                inner.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key` with the given TTL, then sweeps the
    /// oldest entries if the capacity ceiling was crossed.
    pub fn insert(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut inner = self.inner.lock().expect("cache mutex poisoned");

        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.entries.insert(
            key.into(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl,
                seq,
            },
        );

        if inner.entries.len() > self.max_entries {
            let mut by_age: Vec<(String, u64)> = inner
                .entries
                .iter()
                .map(|(k, e)| (k.clone(), e.seq))
                .collect();
            by_age.sort_unstable_by_key(|(_, seq)| *seq);

            for (old_key, _) in by_age.into_iter().take(self.evict_batch) {
                inner.entries.remove(&old_key);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache mutex poisoned").entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .expect("cache mutex poisoned")
            .entries
            .clear();
        info!("Response cache cleared");
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.len(),
            max_entries: self.max_entries,
        }
    }
}
