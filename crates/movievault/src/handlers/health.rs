//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage-backed readiness probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage-backed readiness probe.
///
/// Issues a minimal repository read so the probe fails when the backing
/// store is unreachable. Absent lookups are never cached, so the probe
/// always reaches the store.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.movie_repo.get_by_id("healthz-probe").await {
        Ok(_) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unavailable",
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}
