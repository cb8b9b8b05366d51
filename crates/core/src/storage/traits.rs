use async_trait::async_trait;

use crate::movie::Movie;

use super::{Result, SearchCriteria};

/// Repository contract for movie catalog operations.
///
/// Both the direct store implementations and the caching decorator satisfy
/// this trait, so callers compose them without seeing the difference.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Gets every movie in the catalog, in no guaranteed order.
    async fn get_all(&self) -> Result<Vec<Movie>>;

    /// Gets a movie by its ID. Absence is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>>;

    /// Searches movies matching every predicate present in the criteria,
    /// sorted and truncated as the criteria request.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Movie>>;

    /// Gets the most popular movies, descending by popularity.
    ///
    /// A non-positive limit is normalized to [`super::DEFAULT_LIST_LIMIT`].
    async fn get_popular(&self, limit: i64) -> Result<Vec<Movie>>;

    /// Gets recommended movies: popularity-descending with the top
    /// [`super::RECOMMENDATION_SKIP`] skipped.
    ///
    /// A placeholder heuristic, not a ranking model. The skip semantic is
    /// preserved for compatibility with existing consumers.
    async fn get_recommendations(&self, limit: i64) -> Result<Vec<Movie>>;

    /// Persists a new movie, assigning its ID. Returns the stored record.
    async fn create(&self, movie: Movie) -> Result<Movie>;

    /// Replaces the full record matching `movie.id`. `Ok(None)` if none matched.
    async fn update(&self, movie: &Movie) -> Result<Option<Movie>>;

    /// Deletes a movie by its ID. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
