//! API server configuration.

use std::path::PathBuf;

use bookstore_core::auth::jwt::resolve_jwt_secret;
use bookstore_core::auth::password::DEFAULT_BCRYPT_COST;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,
    /// Optional JSON file replacing the default catalog seed.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable           | Default                                     |
    /// |--------------------|---------------------------------------------|
    /// | `HOST`             | `127.0.0.1`                                 |
    /// | `PORT`             | `3000`                                      |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file     |
    /// | `BCRYPT_COST`      | `8`                                         |
    /// | `CATALOG_PATH`     | unset (built-in seed)                       |
    pub fn from_env() -> Self {
        Self {
            bind_addr: bind_addr(
                std::env::var("HOST").ok().as_deref(),
                std::env::var("PORT").ok().as_deref(),
            ),
            jwt_secret: resolve_jwt_secret(),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
            catalog_path: std::env::var_os("CATALOG_PATH").map(PathBuf::from),
        }
    }
}

/// `host:port`, falling back to `127.0.0.1` and `3000` for unset or empty parts.
pub fn bind_addr(host: Option<&str>, port: Option<&str>) -> String {
    let host = host.filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
    let port = port.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PORT);
    format!("{host}:{port}")
}
