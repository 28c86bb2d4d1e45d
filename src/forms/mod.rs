//! Raw request parameters and their validation.

use thiserror::Error;

pub mod tickets;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid page")]
    InvalidPage,

    #[error("invalid page size")]
    InvalidPageSize,
}
