use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry, issuer or audience validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is only logged.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token was signed with a key the server does not know.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token signed with unknown key {0:?}")]
    UnknownSigningKey(Option<String>),

    /// Authenticated subject lacks a required role.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Subject ID of the caller
    /// - Reason, logged server-side only
    #[error("Access denied for subject {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UnknownSigningKey` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UnknownSigningKey(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to access this resource".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
