//! # DealerHub API
//!
//! Axum HTTP service for the car dealership review application: session
//! authentication backed by SQLite, a locally persisted car catalog, and a
//! thin proxy over the external dealer-service and sentiment-service with
//! concurrent sentiment enrichment of review batches.

pub mod auth;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::state::AppState;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::auth::router())
        .merge(routes::cars::router())
        .merge(routes::dealers::router())
        .merge(routes::reviews::router())
        .merge(routes::health::router())
        .route(
            "/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
