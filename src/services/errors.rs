use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("insufficient permissions")]
    Unauthorized,

    #[error("invalid page")]
    InvalidPage,

    #[error("invalid page size")]
    InvalidPageSize,

    /// The ticket store failed; the request produced no partial result.
    #[error("ticket store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Stable error code reported to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Unauthorized => "NO_PERMISSION",
            ServiceError::InvalidPage => "INVALID_PAGE",
            ServiceError::InvalidPageSize => "INVALID_PAGE_SIZE",
            ServiceError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::InvalidPage => ServiceError::InvalidPage,
            FormError::InvalidPageSize => ServiceError::InvalidPageSize,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::StoreUnavailable(err.to_string())
    }
}
