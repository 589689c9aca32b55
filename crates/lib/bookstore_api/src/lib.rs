//! # bookstore_api
//!
//! HTTP API library for Bookstore.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use bookstore_core::auth::jwt::TokenIssuer;
use bookstore_core::auth::password::PasswordHasher;
use bookstore_core::auth::store::CredentialStore;
use bookstore_core::catalog::{BookStore, CatalogError, InMemoryBookStore, load_seed_file};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth, books};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered users and password checks.
    pub credentials: CredentialStore,
    /// Token signing and verification.
    pub tokens: TokenIssuer,
    /// Book catalog.
    pub books: Arc<dyn BookStore>,
}

impl AppState {
    /// Build in-memory state from configuration.
    ///
    /// The catalog comes from `config.catalog_path` when set, otherwise the
    /// default seed.
    pub fn from_config(config: &ApiConfig) -> Result<Self, StateError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let books = match &config.catalog_path {
            Some(path) => InMemoryBookStore::with_books(load_seed_file(path)?)?,
            None => InMemoryBookStore::seeded(),
        };
        Ok(Self {
            credentials: CredentialStore::in_memory(hasher),
            tokens: TokenIssuer::new(config.jwt_secret.as_bytes()),
            books: Arc::new(books),
        })
    }
}

/// Failure to assemble [`AppState`] at startup.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Auth(#[from] bookstore_core::auth::AuthError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::POST_REGISTER, post(auth::register_handler))
        .route(routes::POST_LOGIN, post(auth::login_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(routes::GET_BOOKS, get(books::list_books_handler))
        .route(routes::GET_BOOKS_ISBN, get(books::book_by_isbn_handler))
        .route(routes::GET_BOOKS_AUTHOR, get(books::books_by_author_handler))
        .route(routes::GET_BOOKS_TITLE, get(books::books_by_title_handler))
        .route(routes::GET_BOOKS_REVIEW, get(books::review_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
