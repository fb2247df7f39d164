//! Login, logout, and registration.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::{
    clear_session_cookie, hash_password, new_salt, session_cookie, session_token, verify_password,
};
use crate::db::users::{self, CreateUserOutcome, NewUser};
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/register", post(register))
}

/// Login request body. Field names match the frontend contract.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "userName")]
    pub username: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(rename = "userName")]
    pub username: String,
    pub password: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Authenticate and establish a session.
///
/// A successful login carries `"status": "Authenticated"` in the body; a
/// failed one echoes the username with no marker and still answers 200,
/// which is what the frontend keys off.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Body carries \"Authenticated\" on success, no marker on failure")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let user = users::find_by_username(&state.db, &body.username).await?;

    let authenticated = user
        .as_ref()
        .is_some_and(|u| verify_password(&body.password, &u.salt, &u.password_hash));

    if authenticated {
        let token = state.sessions.create(&body.username);
        tracing::info!(username = %body.username, "login succeeded");
        Ok((
            AppendHeaders([(SET_COOKIE, session_cookie(token))]),
            Json(serde_json::json!({
                "userName": body.username,
                "status": "Authenticated",
            })),
        )
            .into_response())
    } else {
        tracing::info!(username = %body.username, "login failed");
        Ok(Json(serde_json::json!({ "userName": body.username })).into_response())
    }
}

/// Terminate the current session, if any.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 200, description = "Session cleared")),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>, headers: axum::http::HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(token);
    }
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "userName": "" })),
    )
        .into_response()
}

/// Create an account and establish a session.
///
/// A taken username answers with `"error": "Already Registered"` and leaves
/// both the user table and the session store untouched.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Authenticated on success, \"Already Registered\" error for a taken username")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let salt = new_salt();
    let new_user = NewUser {
        username: body.username.clone(),
        password_hash: hash_password(&body.password, &salt),
        salt,
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
    };

    match users::create_user(&state.db, &new_user).await? {
        CreateUserOutcome::Created(id) => {
            let token = state.sessions.create(&body.username);
            tracing::info!(username = %body.username, user_id = id, "registered new user");
            Ok((
                AppendHeaders([(SET_COOKIE, session_cookie(token))]),
                Json(serde_json::json!({
                    "userName": body.username,
                    "status": "Authenticated",
                })),
            )
                .into_response())
        }
        CreateUserOutcome::AlreadyExists => {
            tracing::info!(username = %body.username, "registration rejected, username taken");
            Ok(Json(serde_json::json!({
                "userName": body.username,
                "error": "Already Registered",
            }))
            .into_response())
        }
    }
}
