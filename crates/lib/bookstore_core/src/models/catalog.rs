//! Catalog domain models.

use serde::{Deserialize, Serialize};

/// A catalog entry. `isbn` is the unique lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub review: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        review: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            review: review.into(),
        }
    }

    /// Exact, case-sensitive author match.
    pub fn has_author(&self, author: &str) -> bool {
        self.author == author
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}
