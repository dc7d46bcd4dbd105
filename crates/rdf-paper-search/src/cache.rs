//! Short-lived response cache.
//!
//! Entries expire after a fixed TTL. There is no LRU: once the cache holds
//! more than its entry bound, the next insertion clears it wholesale.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic expiry.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self { now: Mutex::new(Instant::now()) }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    inserted_at: Instant,
    value: V,
}

/// TTL cache keyed by string.
///
/// The lock is only held for synchronous map operations, never across an await.
pub struct ResponseCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    /// Create a cache on the system clock.
    #[must_use]
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self::with_clock(ttl, max_entries, Arc::new(SystemClock))
    }

    /// Create a cache on a custom clock.
    #[must_use]
    pub fn with_clock(ttl: Duration, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), ttl, max_entries, clock }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a fresh value. An expired entry is evicted and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let entry = entries.get(key)?;
        if now.saturating_duration_since(entry.inserted_at) > self.ttl {
            entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Store a value, clearing everything first if the bound is exceeded.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let inserted_at = self.clock.now();
        let mut entries = self.lock();

        if entries.len() > self.max_entries {
            tracing::debug!(entries = entries.len(), "Clearing response cache");
            entries.clear();
        }
        entries.insert(key.into(), CacheEntry { inserted_at, value });
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<V> fmt::Debug for ResponseCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_clock(max_entries: usize) -> (ResponseCache<u32>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = ResponseCache::with_clock(Duration::from_secs(60), max_entries, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_hit_within_ttl() {
        let (cache, clock) = cache_with_clock(300);
        cache.insert("k", 1);
        clock.advance(Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(1));
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let (cache, clock) = cache_with_clock(300);
        cache.insert("k", 1);
        cache.insert("other", 2);
        clock.advance(Duration::from_secs(61));

        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss() {
        let (cache, _) = cache_with_clock(300);
        assert!(cache.is_empty());
        assert_eq!(cache.get("absent"), None);
    }

    #[test]
    fn test_cleared_wholesale_when_bound_exceeded() {
        let (cache, _) = cache_with_clock(3);
        for i in 0..4 {
            cache.insert(format!("k{i}"), i);
        }
        assert_eq!(cache.len(), 4);

        cache.insert("k4", 4);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k0"), None);
        assert_eq!(cache.get("k4"), Some(4));
    }

    #[test]
    fn test_reinsert_refreshes_timestamp() {
        let (cache, clock) = cache_with_clock(300);
        cache.insert("k", 1);
        clock.advance(Duration::from_secs(50));
        cache.insert("k", 2);
        clock.advance(Duration::from_secs(50));
        assert_eq!(cache.get("k"), Some(2));
    }
}
