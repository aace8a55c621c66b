use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::TokenVerifier,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::token::{issue_token, TokenFactory, TEST_CLIENT_ID, TEST_SECRET};

mod require;

fn verifier() -> TokenVerifier {
    TokenVerifier::from_secret(TEST_SECRET, TEST_CLIENT_ID)
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn bearer(token: &str) -> HeaderMap {
    headers_with(&format!("Bearer {}", token))
}
