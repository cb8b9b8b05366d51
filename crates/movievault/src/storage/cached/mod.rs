//! Cached repository decorator.
//!
//! This module provides a decorator that wraps the movie repository trait
//! with caching behavior, following the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then invalidate affected cache entries
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("movies.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached_repo = CachedMovieRepository::new(repo, cache, CacheTtls::default());
//! ```

mod movie;

pub use movie::{CacheTtls, CachedMovieRepository};
