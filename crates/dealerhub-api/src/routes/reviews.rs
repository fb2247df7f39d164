//! Review aggregation and submission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use dealerhub_core::Review;

use crate::auth::SessionIdentity;
use crate::enrichment::enrich_reviews;
use crate::routes::dealers::bad_request;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reviews/dealer/:id", get(get_dealer_reviews))
        .route("/add_review", post(add_review))
}

/// Fetch a dealer's reviews and attach a sentiment label to each.
///
/// Enrichment runs concurrently with per-review isolation; a review whose
/// sentiment lookup fails is returned without a label. An unreachable
/// dealer-service degrades to an empty list.
#[utoipa::path(
    get,
    path = "/reviews/dealer/{id}",
    params(("id" = i64, Path, description = "Dealer id, must be nonzero")),
    responses(
        (status = 200, description = "Sentiment-enriched reviews"),
        (status = 400, description = "Missing or zero dealer id")
    ),
    tag = "reviews"
)]
pub async fn get_dealer_reviews(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if id == 0 {
        return bad_request();
    }

    let reviews = match state.dealers.fetch_reviews(id).await {
        Ok(reviews) => reviews,
        Err(err) => {
            tracing::warn!(dealer_id = id, error = %err,
                "review fetch failed, returning empty list");
            return Json(serde_json::json!({ "status": 200, "reviews": [] })).into_response();
        }
    };

    let enriched = enrich_reviews(
        state.sentiment.clone(),
        reviews,
        state.config.sentiment_concurrency,
        state.config.sentiment_timeout,
    )
    .await;

    Json(serde_json::json!({ "status": 200, "reviews": enriched })).into_response()
}

/// Submit a review to the dealer-service.
///
/// Requires an authenticated session; without one the dealer-service is
/// never contacted.
#[utoipa::path(
    post,
    path = "/add_review",
    responses(
        (status = 200, description = "Review accepted by the dealer-service"),
        (status = 401, description = "Dealer-service rejected or did not receive the review"),
        (status = 403, description = "No authenticated session")
    ),
    tag = "reviews"
)]
pub async fn add_review(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Json(review): Json<Review>,
) -> Response {
    let Some(username) = identity.username() else {
        return (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "status": 403, "message": "Unauthorized" })),
        )
            .into_response();
    };

    match state.dealers.post_review(&review).await {
        Ok(_) => {
            tracing::info!(username, dealer_id = review.dealership, "review posted");
            Json(serde_json::json!({ "status": 200 })).into_response()
        }
        Err(err) => {
            tracing::warn!(username, error = %err, "review post failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "status": 401,
                    "message": "Error in posting review",
                })),
            )
                .into_response()
        }
    }
}
