//! SQLite repository implementation.
//!
//! Implements `MovieRepository` from `movievault_core::storage` using
//! `rusqlite` behind the `tokio-rusqlite` async wrapper.

use async_trait::async_trait;
use rusqlite::types::Value;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use movievault_core::movie::Movie;
use movievault_core::storage::{
    normalize_limit, MovieRepository, RepositoryError, Result, SearchCriteria, SortDirection,
    DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, RECOMMENDATION_SKIP,
};

use super::conversions::{genre_to_json, row_to_movie};
use super::error::map_sqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Builds the criteria search statement and its positional parameters.
///
/// Only the predicates present in the criteria appear in the WHERE clause;
/// empty criteria select everything. Substring predicates use `INSTR` over
/// `LOWER(...)` so the match semantics line up with the in-memory reference
/// (`matches_criteria`). SQLite's LOWER folds ASCII only, so non-ASCII
/// terms match case-sensitively here.
fn build_search_query(criteria: &SearchCriteria) -> (String, Vec<Value>) {
    let mut sql = String::from(schema::SELECT_MOVIES_BASE);
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(query) = &criteria.query {
        let term = query.to_lowercase();
        params.push(Value::Text(term.clone()));
        let title_param = params.len();
        params.push(Value::Text(term));
        let description_param = params.len();
        clauses.push(format!(
            "(INSTR(LOWER(title), ?{title_param}) > 0 \
             OR INSTR(LOWER(IFNULL(description, '')), ?{description_param}) > 0)"
        ));
    }

    if let Some(genre) = &criteria.genre {
        params.push(Value::Text(genre.to_lowercase()));
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM json_each(movies.genre) \
             WHERE INSTR(LOWER(json_each.value), ?{}) > 0)",
            params.len()
        ));
    }

    if let Some(from) = criteria.year_from {
        params.push(Value::Integer(from.into()));
        clauses.push(format!("year >= ?{}", params.len()));
    }

    if let Some(to) = criteria.year_to {
        params.push(Value::Integer(to.into()));
        clauses.push(format!("year <= ?{}", params.len()));
    }

    if let Some(popularity) = criteria.popularity {
        params.push(Value::Integer(popularity.into()));
        clauses.push(format!("popularity >= ?{}", params.len()));
    }

    if let Some(rating) = criteria.rating {
        params.push(Value::Real(rating));
        clauses.push(format!("rating >= ?{}", params.len()));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let Some(field) = criteria.order_by {
        // Sortable fields are a closed enum whose names match the columns.
        let direction = match criteria.order_direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        sql.push_str(&format!(" ORDER BY {} {direction}", field.as_str()));
    }

    params.push(Value::Integer(normalize_limit(
        criteria.limit,
        DEFAULT_SEARCH_LIMIT,
    )));
    sql.push_str(&format!(" LIMIT ?{}", params.len()));

    (sql, params)
}

/// SQLite-based movie repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_sqlite_error)
    }
}

#[async_trait]
impl MovieRepository for SqliteRepository {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_MOVIES_BASE).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_movie).map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_MOVIE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id], row_to_movie) {
                    Ok(movie) => Ok(Some(movie)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Movie>> {
        let (sql, params) = build_search_query(criteria);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params), row_to_movie)
                    .map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn get_popular(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_POPULAR).map_err(wrap_err)?;
                let rows = stmt.query_map([limit], row_to_movie).map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn get_recommendations(&self, limit: i64) -> Result<Vec<Movie>> {
        let limit = normalize_limit(limit, DEFAULT_LIST_LIMIT);
        let skip = RECOMMENDATION_SKIP as i64;

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_RECOMMENDATIONS)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, skip], row_to_movie)
                    .map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn create(&self, movie: Movie) -> Result<Movie> {
        let id = Uuid::new_v4().to_string();
        let movie = movie.with_id(id.clone());

        let genre_json = genre_to_json(&movie.genre)?;
        let stored = movie.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_MOVIE,
                    rusqlite::params![
                        id,
                        stored.title,
                        genre_json,
                        stored.year,
                        stored.rating,
                        stored.popularity,
                        stored.description,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_sqlite_error)?;

        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>> {
        let Some(id) = movie.id.clone() else {
            return Ok(None);
        };

        let genre_json = genre_to_json(&movie.genre)?;
        let stored = movie.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_MOVIE,
                    rusqlite::params![
                        id,
                        stored.title,
                        genre_json,
                        stored.year,
                        stored.rating,
                        stored.popularity,
                        stored.description,
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(map_sqlite_error)?;

        if rows == 0 {
            Ok(None)
        } else {
            Ok(Some(movie.clone()))
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let id = id.to_string();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_MOVIE, [&id]).map_err(wrap_err)
            })
            .await
            .map_err(map_sqlite_error)?;

        Ok(rows > 0)
    }
}
