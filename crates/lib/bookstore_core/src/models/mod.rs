//! Domain models shared between the core services and the HTTP layer.

pub mod auth;
pub mod catalog;
