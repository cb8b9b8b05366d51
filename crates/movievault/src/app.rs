use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        movies::{
            create_movie, delete_movie, get_movie, list_movies, popular_movies,
            recommended_movies, search_movies, update_movie,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/search", get(search_movies))
        .route("/movies/popular", get(popular_movies))
        .route("/movies/recommendations", get(recommended_movies))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
