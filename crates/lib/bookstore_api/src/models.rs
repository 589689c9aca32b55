//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /login`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
