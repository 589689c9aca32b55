//! Business flows sitting between handlers and `bookstore_core`.

pub mod auth;
