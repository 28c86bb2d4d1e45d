//! Persistence and transport models.

#[cfg(feature = "server")]
pub mod auth;
pub mod config;
pub mod ticket;
