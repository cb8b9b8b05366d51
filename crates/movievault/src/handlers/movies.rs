//! Movie catalog handlers.
//!
//! Thin plumbing over the repository facade: handlers map query and body
//! payloads onto the core types, branch on absence for 404s, and let
//! [`AppError`] translate everything else into status codes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use movievault_core::movie::{Movie, MoviePatch, ValidationError};
use movievault_core::storage::{SearchCriteria, SortDirection, SortField};

use crate::{handlers::AppError, state::AppState};

/// Query parameters for `GET /api/v1/movies/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub query: Option<String>,
    pub genre: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub popularity: Option<i32>,
    pub rating: Option<f64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub limit: Option<i64>,
}

impl SearchQuery {
    /// Maps the raw query parameters onto search criteria.
    ///
    /// Unrecognized `orderBy` values leave the result unsorted, anything but
    /// `asc` sorts descending, and a non-positive limit becomes the default,
    /// all per the repository contract.
    fn into_criteria(self) -> SearchCriteria {
        let mut criteria = SearchCriteria::new();
        if let Some(query) = self.query {
            criteria = criteria.with_query(query);
        }
        if let Some(genre) = self.genre {
            criteria = criteria.with_genre(genre);
        }
        if let Some(year) = self.year_from {
            criteria = criteria.with_year_from(year);
        }
        if let Some(year) = self.year_to {
            criteria = criteria.with_year_to(year);
        }
        if let Some(popularity) = self.popularity {
            criteria = criteria.with_popularity(popularity);
        }
        if let Some(rating) = self.rating {
            criteria = criteria.with_rating(rating);
        }
        if let Some(field) = self.order_by.as_deref().and_then(SortField::parse) {
            criteria = criteria.with_order_by(field);
        }
        if let Some(direction) = self.order_direction.as_deref() {
            criteria = criteria.with_order_direction(SortDirection::parse(direction));
        }
        if let Some(limit) = self.limit {
            criteria = criteria.with_limit(limit);
        }
        criteria
    }
}

/// Query parameters for the popularity and recommendation listings.
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// Payload for `POST /api/v1/movies`.
#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: Vec<String>,
    pub year: i32,
    pub rating: f64,
    pub popularity: i32,
    pub description: Option<String>,
}

impl CreateMovie {
    fn into_movie(self) -> Result<Movie, ValidationError> {
        Movie::new(
            self.title,
            self.genre,
            self.year,
            self.rating,
            self.popularity,
            self.description,
        )
    }
}

/// "Not found" response for a movie id.
fn movie_not_found(id: &str) -> Response {
    tracing::warn!(movie_id = %id, "Movie not found");
    (StatusCode::NOT_FOUND, format!("Movie {id} not found")).into_response()
}

/// List all movies (GET /api/v1/movies).
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movie_repo.get_all().await?;
    Ok(Json(movies))
}

/// Search movies by criteria (GET /api/v1/movies/search).
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let criteria = query.into_criteria();
    let movies = state.movie_repo.search(&criteria).await?;
    Ok(Json(movies))
}

/// List the most popular movies (GET /api/v1/movies/popular).
pub async fn popular_movies(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state
        .movie_repo
        .get_popular(query.limit.unwrap_or(0))
        .await?;
    Ok(Json(movies))
}

/// List recommended movies (GET /api/v1/movies/recommendations).
///
/// "Recommended" is the catalog's placeholder heuristic (popularity order
/// minus the top entries), not a personalized ranking.
pub async fn recommended_movies(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state
        .movie_repo
        .get_recommendations(query.limit.unwrap_or(0))
        .await?;
    Ok(Json(movies))
}

/// Get a movie by id (GET /api/v1/movies/{id}).
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.movie_repo.get_by_id(&id).await? {
        Some(movie) => Ok(Json(movie).into_response()),
        None => Ok(movie_not_found(&id)),
    }
}

/// Create a movie (POST /api/v1/movies).
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovie>,
) -> Result<Response, AppError> {
    let movie = payload.into_movie()?;
    let created = state.movie_repo.create(movie).await?;

    tracing::info!(movie_id = ?created.id, title = %created.title, "Created movie");

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// Partially update a movie (PATCH /api/v1/movies/{id}).
///
/// Only explicitly supplied fields are overwritten; the merged record is
/// re-validated before it reaches the store.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<MoviePatch>,
) -> Result<Response, AppError> {
    let Some(existing) = state.movie_repo.get_by_id(&id).await? else {
        return Ok(movie_not_found(&id));
    };

    let merged = existing.patched(&patch)?;

    match state.movie_repo.update(&merged).await? {
        Some(updated) => {
            tracing::info!(movie_id = %id, "Updated movie");
            Ok(Json(updated).into_response())
        }
        None => Ok(movie_not_found(&id)),
    }
}

/// Delete a movie (DELETE /api/v1/movies/{id}).
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if state.movie_repo.delete(&id).await? {
        tracing::info!(movie_id = %id, "Deleted movie");
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(movie_not_found(&id))
    }
}
