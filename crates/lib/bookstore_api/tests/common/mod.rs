//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use bookstore_api::AppState;
use bookstore_core::auth::jwt::{Clock, TokenIssuer};
use bookstore_core::auth::password::PasswordHasher;
use bookstore_core::auth::store::CredentialStore;
use bookstore_core::catalog::InMemoryBookStore;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret";

/// Seeded state with a fast hasher.
pub fn state() -> AppState {
    AppState {
        credentials: CredentialStore::in_memory(PasswordHasher::new(4).unwrap()),
        tokens: TokenIssuer::new(SECRET),
        books: Arc::new(InMemoryBookStore::seeded()),
    }
}

/// Seeded state whose token issuer reads `clock`.
pub fn state_with_clock(clock: Arc<dyn Clock>) -> AppState {
    AppState {
        tokens: TokenIssuer::with_clock(SECRET, clock),
        ..state()
    }
}

pub fn app() -> Router {
    bookstore_api::router(state())
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body)
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Register `username` and log in, returning the bearer token.
pub async fn token_for(app: &Router, username: &str, password: &str) -> String {
    let creds = serde_json::json!({ "username": username, "password": password });
    let (status, _) = send(app, json_post("/register", creds.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, json_post("/login", creds)).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).expect("parse JSON");
    json["token"].as_str().expect("token is string").to_string()
}
