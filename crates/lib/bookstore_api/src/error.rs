//! Application error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bookstore_core::auth::AuthError;
use thiserror::Error;
use tracing::error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Bodies are static plain-text messages; token failures carry no body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m).into_response(),
            AppError::UsernameTaken => {
                (StatusCode::BAD_REQUEST, "Username already exists").into_response()
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password").into_response()
            }
            AppError::MissingToken => StatusCode::UNAUTHORIZED.into_response(),
            AppError::InvalidToken => StatusCode::FORBIDDEN.into_response(),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m).into_response(),
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UsernameTaken => AppError::UsernameTaken,
            AuthError::CredentialError => AppError::InvalidCredentials,
            AuthError::InvalidToken | AuthError::TokenExpired => AppError::InvalidToken,
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
