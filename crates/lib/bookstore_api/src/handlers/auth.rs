//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CredentialsRequest, TokenResponse};
use crate::services::auth;

/// Unreadable or incomplete JSON bodies collapse to a plain 400.
fn credentials(
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<CredentialsRequest> {
    body.map(|Json(c)| c).map_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejected request body");
        AppError::Validation("Invalid request body".into())
    })
}

/// `POST /register` — create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let body = credentials(body)?;
    auth::register(&state, &body.username, &body.password).await?;
    Ok((StatusCode::CREATED, "User registered successfully"))
}

/// `POST /login` — exchange username + password for a bearer token.
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let body = credentials(body)?;
    let resp = auth::login(&state, &body.username, &body.password).await?;
    Ok(Json(resp))
}
