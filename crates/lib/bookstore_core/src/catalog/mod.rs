//! Book catalog storage and queries.

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::catalog::Book;

pub use memory::InMemoryBookStore;
pub use seed::{default_books, load_seed_file};

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(String),

    #[error("Failed to read catalog seed {path}: {source}")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog seed {path}: {source}")]
    SeedFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to the catalog, plus append.
///
/// Query results preserve storage order.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn all(&self) -> Vec<Book>;

    async fn find_by_isbn(&self, isbn: &str) -> Option<Book>;

    /// Books whose author equals `author` exactly.
    async fn find_by_author(&self, author: &str) -> Vec<Book>;

    /// Books whose title contains `title`, ignoring case.
    async fn find_by_title(&self, title: &str) -> Vec<Book>;

    /// Append a book. Fails with [`CatalogError::DuplicateIsbn`] if the ISBN
    /// is already present.
    async fn insert(&self, book: Book) -> Result<(), CatalogError>;
}
