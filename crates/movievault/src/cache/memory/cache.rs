//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using tokio
//! synchronization primitives and LRU eviction policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use movievault_core::cache::{pattern_matches, Cache, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    /// Creates a new cache entry with optional TTL.
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// TTL expiry is lazy: expired entries report as misses on access and are
/// otherwise displaced by LRU pressure. `delete_pattern` walks every entry,
/// which stays cheap at the bounded sizes this cache runs at.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries`.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => Ok(None),
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut store = self.store.write().await;
        let keys_to_delete: Vec<String> = store
            .iter()
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in keys_to_delete {
            store.pop(&key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movievault_core::cache::{all_movies_key, movie_id_key, search_key, search_pattern};
    use movievault_core::storage::SearchCriteria;

    /// Default max entries for tests
    const TEST_MAX_ENTRIES: usize = 1000;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:key";
        let value = b"test value";

        cache.set(key, value, None).await.unwrap();
        let result = cache.get(key).await.unwrap();

        assert_eq!(result, Some(value.to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let result = cache.get("nonexistent:key").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:delete";

        cache.set(key, b"to be deleted", None).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_some());

        cache.delete(key).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:ttl";

        cache
            .set(key, b"short-lived", Some(Duration::from_millis(50)))
            .await
            .unwrap();

        // Should exist immediately
        assert!(cache.get(key).await.unwrap().is_some());

        // Wait for expiration
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Should be expired now
        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_ttl_never_expires() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:no-ttl";

        cache.set(key, b"persistent", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.get(key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_sweeps_search_category_only() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        let search1 = search_key(&SearchCriteria::new().with_genre("Sci-Fi"));
        let search2 = search_key(&SearchCriteria::new().with_query("nova"));
        let by_id = movie_id_key("movie-1");
        let all = all_movies_key();

        cache.set(&search1, b"1", None).await.unwrap();
        cache.set(&search2, b"2", None).await.unwrap();
        cache.set(&by_id, b"3", None).await.unwrap();
        cache.set(&all, b"4", None).await.unwrap();

        cache.delete_pattern(&search_pattern()).await.unwrap();

        // Search entries should be gone
        assert!(cache.get(&search1).await.unwrap().is_none());
        assert!(cache.get(&search2).await.unwrap().is_none());

        // Other categories should remain
        assert!(cache.get(&by_id).await.unwrap().is_some());
        assert!(cache.get(&all).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_no_matches_is_noop() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("user:123", b"value", None).await.unwrap();
        cache.delete_pattern(&search_pattern()).await.unwrap();

        assert!(cache.get("user:123").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_value() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:overwrite";

        cache.set(key, b"first", None).await.unwrap();
        cache.set(key, b"second", None).await.unwrap();

        let result = cache.get(key).await.unwrap();
        assert_eq!(result, Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        // Create a cache with only 3 entries max
        let cache = MemoryCache::new(3);

        cache.set("key1", b"value1", None).await.unwrap();
        cache.set("key2", b"value2", None).await.unwrap();
        cache.set("key3", b"value3", None).await.unwrap();

        // Access key1 to make it recently used
        cache.get("key1").await.unwrap();

        // Insert a 4th entry - should evict key2 (least recently used)
        cache.set("key4", b"value4", None).await.unwrap();

        assert!(cache.get("key1").await.unwrap().is_some());
        assert!(cache.get("key2").await.unwrap().is_none());
        assert!(cache.get("key3").await.unwrap().is_some());
        assert!(cache.get("key4").await.unwrap().is_some());
    }

    #[tokio::test]
    #[should_panic(expected = "max_entries must be > 0")]
    async fn test_zero_max_entries_panics() {
        let _ = MemoryCache::new(0);
    }
}
