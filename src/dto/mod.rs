//! Data transfer objects returned by services and serialized by routes.

pub mod api;
pub mod tickets;
