//! HTTP handlers.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use crate::dto::api::ApiResponse;
use crate::services::ServiceError;

pub mod tickets;

/// HTTP status used for a failed service call.
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        ServiceError::InvalidPage | ServiceError::InvalidPageSize => StatusCode::BAD_REQUEST,
        ServiceError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a failed service call as a `fail` envelope.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    HttpResponse::build(error_status(err)).json(ApiResponse::<()>::fail(err.code()))
}

/// A body that cannot be decoded carries no usable page number.
fn undecodable_body<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::warn!("Rejected ticket list body: {err}");
    InternalError::from_response(err, error_response(&ServiceError::InvalidPage)).into()
}

/// Registers the staff API handlers and their body decoding rules.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| undecodable_body(err)))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| undecodable_body(err)))
        .service(tickets::get_tickets);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_mappings() {
        assert_eq!(error_status(&ServiceError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(error_status(&ServiceError::InvalidPage), StatusCode::BAD_REQUEST);
        assert_eq!(error_status(&ServiceError::InvalidPageSize), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_status(&ServiceError::StoreUnavailable("down".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
