//! Cached movie repository decorator.
//!
//! Wraps a `MovieRepository` implementation with the cache-aside pattern.
//! Cache failures degrade to the underlying repository and are logged, never
//! surfaced to the caller; repository failures always propagate unmodified.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use movievault_core::cache::{
    all_movies_key, deserialize_movie, deserialize_movies, movie_id_key, popular_key,
    recommendations_key, search_key, search_pattern, serialize_movie, serialize_movies, Cache,
};
use movievault_core::movie::Movie;
use movievault_core::storage::{
    normalize_limit, MovieRepository, Result, SearchCriteria, DEFAULT_LIST_LIMIT,
};

/// Time-to-live per cache category.
///
/// Most reads share the `short` class; popular and recommendation listings
/// are tuned independently since they tolerate more staleness.
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    pub short: Duration,
    pub popular: Duration,
    pub recommendations: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            short: Duration::from_secs(300),
            popular: Duration::from_secs(3_600),
            recommendations: Duration::from_secs(7_200),
        }
    }
}

/// Cached movie repository decorator.
///
/// Implements the cache-aside pattern over any [`MovieRepository`]:
///
/// - **Reads**: check the cache by derived key; on hit return without touching
///   the repository; on miss fetch, populate with the category TTL, return.
///   Absent `get_by_id` results are not cached.
/// - **Writes**: persist to the repository first; only after success, sweep
///   every `search` cache entry (any write can change any search's result
///   set). `update` also drops the record's by-id entry. A deleted record's
///   by-id entry is left to expire by TTL.
///
/// Known, accepted consistency gaps: concurrent misses for one key each query
/// the repository (no single-flight suppression), and a read racing a write's
/// invalidation sweep can leave a stale search entry alive until its TTL
/// expires. The sweep and the store write are not one atomic transaction.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedMovieRepository<R, C>
where
    R: MovieRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttls: CacheTtls,
}

impl<R, C> CachedMovieRepository<R, C>
where
    R: MovieRepository,
    C: Cache,
{
    /// Creates a new cached movie repository.
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttls: CacheTtls) -> Self {
        Self {
            repository,
            cache,
            ttls,
        }
    }

    /// Looks up a cached movie list, treating every failure as a miss.
    async fn lookup_list(&self, key: &str) -> Option<Vec<Movie>> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize_movies(&bytes) {
                Ok(movies) => Some(movies),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cached movie list failed to deserialize");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache lookup failed, falling back to store");
                None
            }
        }
    }

    /// Caches a movie list; failures are logged and swallowed.
    async fn store_list(&self, key: &str, movies: &[Movie], ttl: Duration) {
        match serialize_movies(movies) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(key, &bytes, Some(ttl)).await {
                    tracing::warn!(key = %key, error = %err, "Failed to cache movie list");
                }
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to serialize movie list");
            }
        }
    }

    /// Removes every cached search result.
    ///
    /// Any write can change any search's result set, and the store's predicate
    /// model gives no cheap way to tell which, so the whole category goes.
    async fn invalidate_searches(&self) {
        let pattern = search_pattern();
        if let Err(err) = self.cache.delete_pattern(&pattern).await {
            tracing::warn!(pattern = %pattern, error = %err, "Failed to sweep search cache");
        }
    }
}

#[async_trait]
impl<R, C> MovieRepository for CachedMovieRepository<R, C>
where
    R: MovieRepository + 'static,
    C: Cache + 'static,
{
    async fn get_all(&self) -> Result<Vec<Movie>> {
        let cache_key = all_movies_key();

        if let Some(movies) = self.lookup_list(&cache_key).await {
            tracing::trace!(key = %cache_key, count = movies.len(), "Cache hit for all movies");
            return Ok(movies);
        }

        tracing::trace!(key = %cache_key, "Cache miss for all movies");
        let movies = self.repository.get_all().await?;

        self.store_list(&cache_key, &movies, self.ttls.short).await;

        Ok(movies)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let cache_key = movie_id_key(id);

        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_movie(&bytes) {
                Ok(movie) => {
                    tracing::trace!(movie_id = %id, "Cache hit for movie");
                    return Ok(Some(movie));
                }
                Err(err) => {
                    tracing::warn!(movie_id = %id, error = %err, "Cached movie failed to deserialize");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(movie_id = %id, error = %err, "Cache lookup failed, falling back to store");
            }
        }

        tracing::trace!(movie_id = %id, "Cache miss for movie");
        let movie = self.repository.get_by_id(id).await?;

        // Only positive lookups are cached; a missing id must not be pinned
        // as absent for a whole TTL.
        if let Some(ref m) = movie {
            match serialize_movie(m) {
                Ok(bytes) => {
                    if let Err(err) = self
                        .cache
                        .set(&cache_key, &bytes, Some(self.ttls.short))
                        .await
                    {
                        tracing::warn!(movie_id = %id, error = %err, "Failed to cache movie");
                    }
                }
                Err(err) => {
                    tracing::warn!(movie_id = %id, error = %err, "Failed to serialize movie");
                }
            }
        }

        Ok(movie)
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Movie>> {
        let cache_key = search_key(criteria);

        if let Some(movies) = self.lookup_list(&cache_key).await {
            tracing::trace!(key = %cache_key, count = movies.len(), "Cache hit for search");
            return Ok(movies);
        }

        tracing::trace!(key = %cache_key, "Cache miss for search");
        let movies = self.repository.search(criteria).await?;

        self.store_list(&cache_key, &movies, self.ttls.short).await;

        Ok(movies)
    }

    async fn get_popular(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);
        let cache_key = popular_key(limit);

        if let Some(movies) = self.lookup_list(&cache_key).await {
            tracing::trace!(key = %cache_key, count = movies.len(), "Cache hit for popular movies");
            return Ok(movies);
        }

        tracing::trace!(key = %cache_key, "Cache miss for popular movies");
        let movies = self.repository.get_popular(limit).await?;

        self.store_list(&cache_key, &movies, self.ttls.popular).await;

        Ok(movies)
    }

    async fn get_recommendations(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);
        let cache_key = recommendations_key(limit);

        if let Some(movies) = self.lookup_list(&cache_key).await {
            tracing::trace!(key = %cache_key, count = movies.len(), "Cache hit for recommendations");
            return Ok(movies);
        }

        tracing::trace!(key = %cache_key, "Cache miss for recommendations");
        let movies = self.repository.get_recommendations(limit).await?;

        self.store_list(&cache_key, &movies, self.ttls.recommendations)
            .await;

        Ok(movies)
    }

    async fn create(&self, movie: Movie) -> Result<Movie> {
        // Persist first; invalidation only happens for a completed mutation.
        let created = self.repository.create(movie).await?;

        self.invalidate_searches().await;

        tracing::debug!(movie_id = ?created.id, title = %created.title, "Movie created");
        Ok(created)
    }

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>> {
        let updated = self.repository.update(movie).await?;

        self.invalidate_searches().await;

        if let Some(id) = movie.id.as_deref() {
            if let Err(err) = self.cache.delete(&movie_id_key(id)).await {
                tracing::warn!(movie_id = %id, error = %err, "Failed to invalidate movie cache");
            }
        }

        tracing::debug!(movie_id = ?movie.id, matched = updated.is_some(), "Movie updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.repository.delete(id).await?;

        // The by-id entry for a deleted record is left to expire by TTL.
        self.invalidate_searches().await;

        tracing::debug!(movie_id = %id, deleted, "Movie delete attempted");
        Ok(deleted)
    }
}
