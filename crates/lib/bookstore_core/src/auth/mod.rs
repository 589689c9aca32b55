//! Authentication logic.
//!
//! Provides password hashing, credential storage, and JWT issuance and
//! verification. The HTTP layer in `bookstore_api` only orchestrates these.

pub mod jwt;
pub mod password;
pub mod store;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username or password")]
    CredentialError,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
