//! Car catalog listing.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::db::cars;
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/get_cars", get(get_cars))
}

/// List the catalog as `{model, make}` pairs, seeding it first if empty.
#[utoipa::path(
    get,
    path = "/get_cars",
    responses((status = 200, description = "Catalog listing under \"CarModels\"")),
    tag = "cars"
)]
pub async fn get_cars(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    if cars::count_makes(&state.db).await? == 0 {
        cars::seed_catalog(&state.db).await?;
    }
    let listings = cars::list_listings(&state.db).await?;
    Ok(Json(serde_json::json!({ "CarModels": listings })))
}
