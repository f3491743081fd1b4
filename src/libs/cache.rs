//! Time-to-live cache for loaded worksheet data.
//!
//! The loader keeps its last result per key for a bounded window so that
//! repeated renders do not hit the data source each time. Lookups and
//! invalidation are explicit: callers pass the key and the TTL, and a manual
//! refresh calls [`TtlCache::invalidate`] or [`TtlCache::clear`].
//!
//! The clock is injectable so expiry can be tested without sleeping.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source for cache expiry.
pub trait Clock: Send + Sync {
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

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut offset) = self.offset.lock() {
            *offset += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().map(|offset| *offset).unwrap_or_default();
        self.origin + offset
    }
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed cache whose entries expire after a caller-supplied TTL.
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    /// Returns the cached value for `key` if it is younger than `ttl`.
    pub fn get(&self, key: &K, ttl: Duration) -> Option<V> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < ttl)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, stamped with the current time.
    pub fn insert(&mut self, key: K, value: V) {
        let stored_at = self.clock.now();
        self.entries.insert(key, Entry { value, stored_at });
    }

    /// Returns the cached value, or runs `fetch` and caches its result.
    ///
    /// The boolean is `true` when `fetch` ran on this call. A failed fetch
    /// leaves the cache untouched and returns the error.
    pub async fn get_or_fetch<F, Fut, E>(&mut self, key: K, ttl: Duration, fetch: F) -> Result<(V, bool), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key, ttl) {
            return Ok((value, false));
        }

        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok((value, true))
    }

    /// Drops the entry for `key`. Returns whether an entry was present.
    pub fn invalidate(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
