//! Authentication middleware: bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bookstore_core::models::auth::AuthenticatedIdentity;
use tracing::debug;

use crate::AppState;
use crate::error::AppError;

/// Key used to store the verified identity in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthenticatedIdentity);

/// The token is the second space-separated segment of the header value.
fn bearer_token(value: &str) -> Option<&str> {
    value.split(' ').nth(1)
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedUser` into request extensions.
///
/// No header or no token segment is 401; a token that fails verification
/// is 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            debug!(path = %request.uri().path(), "no bearer token");
            AppError::MissingToken
        })?;

    let identity = state.tokens.verify(token)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser(identity));

    Ok(next.run(request).await)
}
