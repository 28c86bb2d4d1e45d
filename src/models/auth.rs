//! Staff identity carried in the session cookie.
//!
//! The identity id stored by `actix-identity` is an HS256 JWT issued by the
//! authentication service. It is decoded with the shared secret from
//! [`ServerConfig`] and turned into a [`StaffIdentity`].

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::staff::StaffIdentity;
use crate::domain::types::{StaffId, StaffLevel, TypeConstraintError};
use crate::dto::api::ApiResponse;
use crate::models::config::ServerConfig;

/// Claims of the staff session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    /// Staff identifier, as a decimal string.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub level: i32,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing identity")]
    MissingIdentity,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("invalid claims: {0}")]
    InvalidClaims(String),
}

impl From<TypeConstraintError> for AuthError {
    fn from(err: TypeConstraintError) -> Self {
        AuthError::InvalidClaims(err.to_string())
    }
}

impl TryFrom<StaffClaims> for StaffIdentity {
    type Error = AuthError;

    fn try_from(claims: StaffClaims) -> Result<Self, Self::Error> {
        let id: i32 = claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidClaims(format!("bad subject: {}", claims.sub)))?;

        Ok(StaffIdentity {
            id: StaffId::new(id)?,
            email: claims.email,
            name: claims.name,
            level: StaffLevel::try_from(claims.level)?,
        })
    }
}

/// Decodes and validates a staff session token.
pub fn decode_staff_token(token: &str, secret: &str) -> Result<StaffIdentity, AuthError> {
    let data = decode::<StaffClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    StaffIdentity::try_from(data.claims)
}

fn extract_identity(req: &HttpRequest) -> Result<StaffIdentity, AuthError> {
    let token = req
        .get_identity()
        .and_then(|identity| identity.id())
        .map_err(|_| AuthError::MissingIdentity)?;

    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| AuthError::InvalidClaims("server config is not registered".to_string()))?;

    decode_staff_token(&token, &config.secret)
}

impl FromRequest for StaffIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_identity(req).map_err(|err| {
            log::warn!("Rejected staff identity: {err}");
            let response =
                HttpResponse::Unauthorized().json(ApiResponse::<()>::fail("NO_PERMISSION"));
            InternalError::from_response(err, response).into()
        }))
    }
}
