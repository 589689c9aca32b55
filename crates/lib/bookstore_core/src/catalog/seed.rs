//! Startup catalog contents.

use std::path::Path;

use tracing::info;

use super::CatalogError;
use crate::models::catalog::Book;

/// The two books every fresh catalog starts with.
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new("Book 1", "Author 1", "1234567890", "Great book"),
        Book::new("Book 2", "Author 2", "0987654321", "Interesting read"),
    ]
}

/// Load a JSON array of books from `path`.
pub fn load_seed_file(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedRead {
        path: path.display().to_string(),
        source,
    })?;
    let books: Vec<Book> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::SeedFormat {
            path: path.display().to_string(),
            source,
        })?;
    info!(path = %path.display(), count = books.len(), "loaded catalog seed");
    Ok(books)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_books_from_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Dune","author":"Frank Herbert","isbn":"0441013597","review":"Spice"}}]"#
        )
        .unwrap();

        let books = load_seed_file(file.path()).unwrap();
        assert_eq!(
            books,
            vec![Book::new("Dune", "Frank Herbert", "0441013597", "Spice")]
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::SeedRead { .. }));
    }

    #[test]
    fn malformed_file_is_a_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title":"not an array"}}"#).unwrap();
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::SeedFormat { .. }));
    }
}
