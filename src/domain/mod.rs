//! Domain entities and value objects shared across layers.

pub mod staff;
pub mod ticket;
pub mod types;
