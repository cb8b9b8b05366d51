//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use movievault_core::movie::Movie;
use movievault_core::storage::{
    matches_criteria, normalize_limit, sort_movies, MovieRepository, Result, SearchCriteria,
    SortDirection, SortField, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, RECOMMENDATION_SKIP,
};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Data is
/// not persisted and is lost when the repository is dropped. This backend is
/// also the reference implementation of the criteria query semantics, built on
/// the pure predicate and sort functions in `movievault_core::storage`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    movies: Arc<RwLock<HashMap<String, Movie>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.get(id).cloned())
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        let mut matches: Vec<Movie> = movies
            .values()
            .filter(|m| matches_criteria(m, criteria))
            .cloned()
            .collect();

        if let Some(field) = criteria.order_by {
            sort_movies(&mut matches, field, criteria.order_direction);
        }

        matches.truncate(normalize_limit(criteria.limit, DEFAULT_SEARCH_LIMIT) as usize);
        Ok(matches)
    }

    async fn get_popular(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);
        let movies = self.movies.read().await;
        let mut all: Vec<Movie> = movies.values().cloned().collect();
        sort_movies(&mut all, SortField::Popularity, SortDirection::Desc);
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn get_recommendations(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);
        let movies = self.movies.read().await;
        let mut all: Vec<Movie> = movies.values().cloned().collect();
        sort_movies(&mut all, SortField::Popularity, SortDirection::Desc);
        Ok(all
            .into_iter()
            .skip(RECOMMENDATION_SKIP)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, movie: Movie) -> Result<Movie> {
        let id = Uuid::new_v4().to_string();
        let movie = movie.with_id(id.clone());
        let mut movies = self.movies.write().await;
        movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>> {
        let Some(id) = movie.id.clone() else {
            return Ok(None);
        };
        let mut movies = self.movies.write().await;
        if !movies.contains_key(&id) {
            return Ok(None);
        }
        movies.insert(id, movie.clone());
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut movies = self.movies.write().await;
        Ok(movies.remove(id).is_some())
    }
}
