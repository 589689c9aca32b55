//! # bookstore_core
//!
//! Core domain logic for Bookstore.

pub mod auth;
pub mod catalog;
pub mod models;
