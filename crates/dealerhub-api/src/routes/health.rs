//! Liveness and readiness probes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// Process is up.
#[utoipa::path(
    get,
    path = "/health/liveness",
    responses((status = 200, description = "Service is running")),
    tag = "health"
)]
pub async fn liveness() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Process can serve traffic: the database pool answers a trivial query.
#[utoipa::path(
    get,
    path = "/health/readiness",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Database is not reachable")
    ),
    tag = "health"
)]
pub async fn readiness(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|err| AppError::ServiceUnavailable(err.to_string()))?;
    Ok(Json(serde_json::json!({ "status": "ready" })))
}
