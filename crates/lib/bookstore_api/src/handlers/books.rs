//! Catalog request handlers. All routes here sit behind `require_auth`.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use bookstore_core::models::catalog::Book;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;

const BOOK_NOT_FOUND: &str = "Book not found";

/// `GET /books` — the full catalog in storage order.
pub async fn list_books_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(identity)): Extension<AuthenticatedUser>,
) -> Json<Vec<Book>> {
    debug!(username = %identity.username, "listing catalog");
    Json(state.books.all().await)
}

/// `GET /books/isbn/{isbn}`
pub async fn book_by_isbn_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    state
        .books
        .find_by_isbn(&isbn)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.into()))
}

/// `GET /books/author/{author}` — exact author match; empty list when none.
pub async fn books_by_author_handler(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.books.find_by_author(&author).await)
}

/// `GET /books/title/{title}` — case-insensitive title substring match.
pub async fn books_by_title_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.books.find_by_title(&title).await)
}

/// `GET /books/review/{isbn}` — the review as plain text.
pub async fn review_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<String> {
    state
        .books
        .find_by_isbn(&isbn)
        .await
        .map(|book| book.review)
        .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.into()))
}
