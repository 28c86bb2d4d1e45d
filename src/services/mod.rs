//! Application services orchestrating validation, permissions and storage.

pub mod errors;
pub mod tickets;

pub use errors::{ServiceError, ServiceResult};
