use crate::server::{error::config::ConfigError, service::auth::TokenVerifier};
use jsonwebtoken::jwk::JwkSet;
use test_utils::token::{TokenFactory, TEST_CLIENT_ID, TEST_SECRET};

mod from_jwks;

fn verifier() -> TokenVerifier {
    TokenVerifier::from_secret(TEST_SECRET, TEST_CLIENT_ID)
}
