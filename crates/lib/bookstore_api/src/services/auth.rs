//! Authentication service: register and login flows over `bookstore_core::auth`.

use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::TokenResponse;

/// Create a new user account.
pub async fn register(state: &AppState, username: &str, password: &str) -> AppResult<()> {
    state
        .credentials
        .register(username, password)
        .await
        .map_err(AppError::from)
}

/// Authenticate with username + password and issue a bearer token.
pub async fn login(state: &AppState, username: &str, password: &str) -> AppResult<TokenResponse> {
    let user = match state.credentials.authenticate(username, password).await {
        Ok(user) => user,
        Err(e) => {
            warn!(username, error = %e, "login failed");
            return Err(e.into());
        }
    };

    let token = state.tokens.issue(&user.username)?;
    info!(username = %user.username, "token issued");
    Ok(TokenResponse { token })
}
