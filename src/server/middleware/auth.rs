use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{Identity, Principal},
    service::auth::TokenVerifier,
};

/// Role requirements an endpoint can place on the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permission {
    /// Registered club member.
    ClubUser,
    /// Club staff managing courts, schedules and the daily overview.
    ClubAdmin,
}

impl Permission {
    /// Identity provider role granting this permission.
    pub fn role(&self) -> &'static str {
        match self {
            Self::ClubUser => "club-user",
            Self::ClubAdmin => "club-admin",
        }
    }
}

pub struct AuthGuard<'a> {
    verifier: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// An empty list only requires a valid bearer token.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Caller is authenticated and holds all required roles
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken | UnknownSigningKey)` - Token failed verification
    /// - `Err(AuthError::AccessDenied)` - A required role is missing
    pub fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let principal = self.verifier.verify(token)?;

        for permission in permissions {
            if !principal.has_role(permission.role()) {
                return Err(AuthError::AccessDenied(
                    principal.subject.clone(),
                    format!("missing role {}", permission.role()),
                )
                .into());
            }
        }

        Ok(principal)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
