//! In-memory catalog.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, CatalogError, default_books};
use crate::models::catalog::Book;

/// Catalog held in a `Vec`, scanned linearly.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the two default books.
    pub fn seeded() -> Self {
        Self {
            books: RwLock::new(default_books()),
        }
    }

    /// Store seeded with `books`, rejecting duplicate ISBNs.
    pub fn with_books(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = books.iter().find(|b| !seen.insert(b.isbn.clone())) {
            return Err(CatalogError::DuplicateIsbn(dup.isbn.clone()));
        }
        Ok(Self {
            books: RwLock::new(books),
        })
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    async fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
    }

    async fn find_by_author(&self, author: &str) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|b| b.has_author(author))
            .cloned()
            .collect()
    }

    async fn find_by_title(&self, title: &str) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|b| b.title_contains(title))
            .cloned()
            .collect()
    }

    async fn insert(&self, book: Book) -> Result<(), CatalogError> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == book.isbn) {
            return Err(CatalogError::DuplicateIsbn(book.isbn));
        }
        books.push(book);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_lists_books_in_order() {
        let store = InMemoryBookStore::seeded();
        let isbns: Vec<_> = store.all().await.into_iter().map(|b| b.isbn).collect();
        assert_eq!(isbns, vec!["1234567890", "0987654321"]);
    }

    #[tokio::test]
    async fn isbn_lookup_is_exact() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(
            store.find_by_isbn("1234567890").await.unwrap().title,
            "Book 1"
        );
        assert!(store.find_by_isbn("0000000000").await.is_none());
        assert!(store.find_by_isbn("123456789").await.is_none());
    }

    #[tokio::test]
    async fn author_match_is_exact_and_case_sensitive() {
        let store = InMemoryBookStore::seeded();
        let hits = store.find_by_author("Author 1").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].isbn, "1234567890");
        assert!(store.find_by_author("author 1").await.is_empty());
        assert!(store.find_by_author("Author").await.is_empty());
    }

    #[tokio::test]
    async fn title_match_is_case_insensitive_substring() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(store.find_by_title("book").await.len(), 2);
        assert_eq!(store.find_by_title("OK 2").await.len(), 1);
        assert!(store.find_by_title("novel").await.is_empty());
    }

    #[tokio::test]
    async fn insert_appends_and_rejects_duplicate_isbn() {
        let store = InMemoryBookStore::seeded();
        store
            .insert(Book::new("Book 3", "Author 3", "1111111111", "Fine"))
            .await
            .unwrap();
        assert_eq!(store.all().await.last().unwrap().isbn, "1111111111");

        let dup = Book::new("Again", "Someone", "1234567890", "");
        assert!(matches!(
            store.insert(dup).await,
            Err(CatalogError::DuplicateIsbn(isbn)) if isbn == "1234567890"
        ));
        assert_eq!(store.all().await.len(), 3);
    }

    #[test]
    fn with_books_rejects_duplicate_isbn() {
        let books = vec![
            Book::new("A", "X", "1", ""),
            Book::new("B", "Y", "1", ""),
        ];
        assert!(InMemoryBookStore::with_books(books).is_err());
    }
}
