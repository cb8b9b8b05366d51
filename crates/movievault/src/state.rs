//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see the repository facade; whether it is
//! the bare store or the cache-aside decorator is decided by the
//! feature-selected factory functions below.

use std::sync::Arc;

use movievault_core::storage::MovieRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!("Cannot enable both 'inmemory' and 'sqlite' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Movie repository facade (the cache-aside decorator over the active
    /// storage backend).
    pub movie_repo: Arc<dyn MovieRepository>,
}

impl AppState {
    /// Creates a new AppState over the given repository facade.
    fn build(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedMovieRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_repo = Arc::new(CachedMovieRepository::new(
                repo,
                cache,
                config.cache_ttls(),
            ));

            Ok(Self::build(cached_repo))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedMovieRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cached_repo = Arc::new(CachedMovieRepository::new(
                repo,
                cache,
                config.cache_ttls(),
            ));

            Ok(Self::build(cached_repo))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedMovieRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_repo = Arc::new(CachedMovieRepository::new(
                repo,
                cache,
                config.cache_ttls(),
            ));

            Ok(Self::build(cached_repo))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedMovieRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cached_repo = Arc::new(CachedMovieRepository::new(
                repo,
                cache,
                config.cache_ttls(),
            ));

            Ok(Self::build(cached_repo))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedMovieRepository;
    use crate::storage::inmemory::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with in-memory storage behind the caching
        /// decorator, so router tests exercise the same read and
        /// invalidation paths as a real deployment.
        fn default() -> Self {
            let config = Config::default();
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_repo = Arc::new(CachedMovieRepository::new(
                repo,
                cache,
                config.cache_ttls(),
            ));

            Self::build(cached_repo)
        }
    }
}
