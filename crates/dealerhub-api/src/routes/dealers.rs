//! Dealer lookup endpoints proxied to the dealer-service.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_dealers", get(get_dealers))
        .route("/get_dealers/:state", get(get_dealers_by_state))
        .route("/dealer/:id", get(get_dealer))
}

/// `{"status": 400, "message": "Bad Request"}` with a matching HTTP status.
pub(crate) fn bad_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "status": 400, "message": "Bad Request" })),
    )
        .into_response()
}

async fn fetch_dealer_list(state: &AppState, scope: Option<&str>) -> Response {
    let result = match scope {
        Some(s) => state.dealers.fetch_dealers_by_state(s).await,
        None => state.dealers.fetch_dealers().await,
    };

    // An unreachable dealer-service degrades to an empty list, never a 5xx.
    let dealers = match result {
        Ok(dealers) => dealers,
        Err(err) => {
            tracing::warn!(state = scope.unwrap_or("All"), error = %err,
                "dealer fetch failed, returning empty list");
            Vec::new()
        }
    };

    Json(serde_json::json!({ "status": 200, "dealers": dealers })).into_response()
}

/// List every dealership.
#[utoipa::path(
    get,
    path = "/get_dealers",
    responses((status = 200, description = "All dealerships; empty list when the dealer-service is unreachable")),
    tag = "dealers"
)]
pub async fn get_dealers(State(state): State<AppState>) -> Response {
    fetch_dealer_list(&state, None).await
}

/// List dealerships in one state. The literal state `"All"` selects the
/// unscoped listing.
#[utoipa::path(
    get,
    path = "/get_dealers/{state}",
    params(("state" = String, Path, description = "US state name, or \"All\"")),
    responses((status = 200, description = "Dealerships in the given state")),
    tag = "dealers"
)]
pub async fn get_dealers_by_state(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Response {
    if scope == "All" {
        fetch_dealer_list(&state, None).await
    } else {
        fetch_dealer_list(&state, Some(&scope)).await
    }
}

/// Fetch a single dealership by id.
#[utoipa::path(
    get,
    path = "/dealer/{id}",
    params(("id" = i64, Path, description = "Dealer id, must be nonzero")),
    responses(
        (status = 200, description = "The dealership"),
        (status = 400, description = "Missing or zero dealer id")
    ),
    tag = "dealers"
)]
pub async fn get_dealer(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if id == 0 {
        return bad_request();
    }

    let dealer = match state.dealers.fetch_dealer(id).await {
        Ok(dealer) => Some(dealer),
        Err(err) => {
            tracing::warn!(dealer_id = id, error = %err, "dealer lookup failed");
            None
        }
    };

    Json(serde_json::json!({ "status": 200, "dealer": dealer })).into_response()
}
