//! Redis cache implementation.
//!
//! `delete_pattern` enumerates matching keys with cursored SCAN and removes
//! them with DEL, the same sweep external cache-flush tooling performs over
//! the search namespace.
//!
//! # Non-Atomicity Safety
//!
//! SCAN and DEL are separate commands, so a key written between the
//! enumeration and the deletion survives the sweep. That key is bounded by
//! its TTL and removed by the next sweep; the caching layer already accepts
//! this staleness window. DEL on a key that expired mid-sweep is a no-op.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use movievault_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut conn = self.conn.clone();

        let keys: Vec<String> = {
            let mut iter = conn
                .scan_match::<_, String>(pattern)
                .await
                .map_err(map_redis_error)?;
            let mut keys = Vec::new();
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
            keys
        };

        if !keys.is_empty() {
            conn.del::<_, ()>(&keys).await.map_err(map_redis_error)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movievault_core::cache::{movie_id_key, search_key, search_pattern};
    use movievault_core::storage::SearchCriteria;
    use uuid::Uuid;

    /// Helper to get Redis URL from environment.
    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis not available.
    async fn get_test_cache() -> Option<RedisCache> {
        RedisCache::new(&redis_url()).await.ok()
    }

    /// Generate a unique test key to avoid conflicts.
    fn test_key(suffix: &str) -> String {
        format!("test:redis_cache:{}:{}", Uuid::new_v4(), suffix)
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("set_get");
        let value = b"hello world";

        cache.set(&key, value, None).await.unwrap();

        let result = cache.get(&key).await.unwrap();
        assert_eq!(result, Some(value.to_vec()));

        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_get_nonexistent() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("nonexistent");
        assert_eq!(cache.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_delete() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("delete");

        cache.set(&key, b"to be deleted", None).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        cache.delete(&key).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_ttl() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("ttl");

        cache
            .set(&key, b"expiring value", Some(Duration::from_secs(1)))
            .await
            .unwrap();

        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_delete_pattern_sweeps_search_keys() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let search1 = search_key(&SearchCriteria::new().with_genre("Sci-Fi"));
        let search2 = search_key(&SearchCriteria::new().with_query("nova"));
        let by_id = movie_id_key("redis-pattern-test");

        cache.set(&search1, b"1", None).await.unwrap();
        cache.set(&search2, b"2", None).await.unwrap();
        cache.set(&by_id, b"3", None).await.unwrap();

        cache.delete_pattern(&search_pattern()).await.unwrap();

        assert!(cache.get(&search1).await.unwrap().is_none());
        assert!(cache.get(&search2).await.unwrap().is_none());

        // Other categories are untouched by the sweep
        assert!(cache.get(&by_id).await.unwrap().is_some());

        cache.delete(&by_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_delete_pattern_without_matches_is_noop() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("noop");
        cache.set(&key, b"value", None).await.unwrap();

        cache
            .delete_pattern("test:redis_cache:no-such-prefix:*")
            .await
            .unwrap();

        assert!(cache.get(&key).await.unwrap().is_some());

        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_overwrite() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("overwrite");

        cache.set(&key, b"initial", None).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"initial".to_vec()));

        cache.set(&key, b"updated", None).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"updated".to_vec()));

        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_binary_data() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("binary");
        let value: Vec<u8> = (0..=255).collect();

        cache.set(&key, &value, None).await.unwrap();

        let result = cache.get(&key).await.unwrap();
        assert_eq!(result, Some(value));

        cache.delete(&key).await.unwrap();
    }
}
