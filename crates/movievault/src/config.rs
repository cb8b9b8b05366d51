use std::{env, time::Duration};

use crate::storage::cached::CacheTtls;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds for all/by-id/search reads (default: 300)
    pub cache_ttl_seconds: u64,
    /// TTL in seconds for popular listings (default: 3,600)
    pub popular_ttl_seconds: u64,
    /// TTL in seconds for recommendation listings (default: 7,200)
    pub recommendations_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "movievault.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - TTL for all/by-id/search reads (default: 300)
    /// - `POPULAR_TTL_SECONDS` - TTL for popular listings (default: 3,600)
    /// - `RECOMMENDATIONS_TTL_SECONDS` - TTL for recommendations (default: 7,200)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "movievault.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            popular_ttl_seconds: env::var("POPULAR_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3_600),
            recommendations_ttl_seconds: env::var("RECOMMENDATIONS_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7_200),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "movievault.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the per-category cache TTLs as Durations.
    pub fn cache_ttls(&self) -> CacheTtls {
        CacheTtls {
            short: Duration::from_secs(self.cache_ttl_seconds),
            popular: Duration::from_secs(self.popular_ttl_seconds),
            recommendations: Duration::from_secs(self.recommendations_ttl_seconds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
