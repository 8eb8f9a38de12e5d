//! Time-bounded cache for idempotent GET listings.
//!
//! Time comes from an injected [`Clock`] so expiry can be tested without
//! sleeping.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of monotonic time.
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
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

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

/// Key-value cache whose entries expire `ttl` after insertion.
///
/// A zero `ttl` disables caching: every lookup misses.
pub struct TtlCache<K, V> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return a live entry, dropping it if it has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some((stored_at, value)) if now.duration_since(*stored_at) < self.ttl => {
                Some(value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: K, value: V) {
        if self.ttl.is_zero() {
            return;
        }
        let now = self.clock.now();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, (now, value));
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(ttl_secs: u64) -> (Arc<ManualClock>, TtlCache<&'static str, u32>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::new(Duration::from_secs(ttl_secs), clock.clone() as Arc<dyn Clock>);
        (clock, cache)
    }

    #[test]
    fn entry_is_served_until_ttl_elapses() {
        let (clock, cache) = cache(60);
        cache.insert("brands", 10);

        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.get(&"brands"), Some(10));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get(&"brands"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let (_clock, cache) = cache(60);
        cache.insert("brands", 1);
        cache.insert("models", 2);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert_eq!(cache.get(&"models"), None);
    }

    #[test]
    fn zero_ttl_never_stores() {
        let (_clock, cache) = cache(0);
        cache.insert("brands", 1);
        assert_eq!(cache.get(&"brands"), None);
        assert!(cache.is_empty());
    }
}
