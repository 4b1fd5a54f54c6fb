//! Short-TTL cache for upstream resources.
//!
//! Keys are opaque strings built by callers as `{resourceType}:{identity}`
//! (the profile fetch uses the bare username) so resource types sharing an
//! identity string cannot collide. Only successful fetch results are stored;
//! failures are never cached. Writes to the same key are last-write-wins.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;

/// Default time-to-live for cached resources: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default number of entries the backing store retains.
pub const DEFAULT_CAPACITY: usize = 256;

/// Source of the current instant, injectable so expiry is deterministic
/// under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

/// Generic expiring map over an LRU backing store.
///
/// An entry older than its TTL behaves as a miss on read and is evicted.
/// The LRU bound keeps memory use fixed regardless of how many distinct
/// subjects are requested.
pub struct ResourceCache<V> {
    entries: Mutex<LruCache<String, Entry<V>>>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResourceCache<V> {
    /// Create a cache with the default TTL and capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Create a cache with an explicit entry bound and default TTL.
    pub fn with_capacity(capacity: usize, default_ttl: Duration) -> Self {
        Self::with_clock(capacity, default_ttl, Arc::new(SystemClock))
    }

    /// Create a cache reading time from the given clock.
    pub fn with_clock(capacity: usize, default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            default_ttl,
            clock,
        }
    }

    /// Retrieve a live value, treating expired entries as absent and
    /// evicting them.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();
        let expired = match entries.get(key) {
            Some(entry) => {
                if self.clock.now().duration_since(entry.stored_at) < entry.ttl {
                    return Some(entry.value.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            entries.pop(key);
        }
        None
    }

    /// Store a value under the default TTL, replacing any prior entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with a per-call TTL override.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            stored_at: self.clock.now(),
            ttl,
        };
        self.entries.lock().unwrap().put(key.into(), entry);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of entries currently held, including not-yet-evicted expired
    /// ones.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for ResourceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock whose reading only moves when the test advances it.
    struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }

    fn manual_cache(ttl: Duration) -> (ResourceCache<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = ResourceCache::with_clock(16, ttl, clock.clone());
        (cache, clock)
    }

    #[test]
    fn set_then_get_returns_value() {
        let (cache, _clock) = manual_cache(DEFAULT_TTL);
        cache.set("octocat", "profile".to_string());
        assert_eq!(cache.get("octocat"), Some("profile".to_string()));
    }

    #[test]
    fn expired_entry_reads_as_miss_and_is_evicted() {
        let (cache, clock) = manual_cache(Duration::from_secs(300));
        cache.set("k", "v".to_string());

        clock.advance(Duration::from_secs(299));
        assert_eq!(cache.get("k"), Some("v".to_string()));

        clock.advance(Duration::from_secs(2));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn set_after_expiry_is_a_fresh_write() {
        let (cache, clock) = manual_cache(Duration::from_secs(60));
        cache.set("k", "stale".to_string());
        clock.advance(Duration::from_secs(120));
        assert_eq!(cache.get("k"), None);

        cache.set("k", "fresh".to_string());
        assert_eq!(cache.get("k"), Some("fresh".to_string()));
        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.get("k"), Some("fresh".to_string()));
    }

    #[test]
    fn per_call_ttl_overrides_default() {
        let (cache, clock) = manual_cache(Duration::from_secs(300));
        cache.set_with_ttl("volatile", "v".to_string(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(11));
        assert_eq!(cache.get("volatile"), None);
    }

    #[test]
    fn same_key_write_replaces_prior_value() {
        let (cache, _clock) = manual_cache(DEFAULT_TTL);
        cache.set("k", "first".to_string());
        cache.set("k", "second".to_string());
        assert_eq!(cache.get("k"), Some("second".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn prefixed_keys_do_not_collide_across_resource_types() {
        let (cache, _clock) = manual_cache(DEFAULT_TTL);
        cache.set("octocat", "profile".to_string());
        cache.set("contributions:octocat", "calendar".to_string());
        cache.set("leetcode:octocat", "judge".to_string());
        assert_eq!(cache.get("octocat"), Some("profile".to_string()));
        assert_eq!(cache.get("contributions:octocat"), Some("calendar".to_string()));
        assert_eq!(cache.get("leetcode:octocat"), Some("judge".to_string()));
    }

    #[test]
    fn capacity_bound_evicts_least_recently_used() {
        let clock = Arc::new(ManualClock::new());
        let cache: ResourceCache<String> =
            ResourceCache::with_clock(2, DEFAULT_TTL, clock);
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());
        cache.set("c", "3".to_string());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("2".to_string()));
        assert_eq!(cache.get("c"), Some("3".to_string()));
    }
}
