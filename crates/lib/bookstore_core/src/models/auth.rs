//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// Registered user with its bcrypt password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// JWT claims embedded in bearer tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the username the token was issued to.
    pub sub: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Identity recovered from a verified token, scoped to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: String,
}

impl From<TokenClaims> for AuthenticatedIdentity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub,
        }
    }
}
