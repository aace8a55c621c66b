use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CLIENT_ID: &str = "padel-backend";

/// Source of the keys used to verify identity provider tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKeySource {
    /// Shared HS256 secret, used for local development and tests.
    Secret(String),
    /// JWKS endpoint of the identity provider realm.
    Jwks(String),
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub auth_keys: TokenKeySource,
    pub auth_issuer: Option<String>,
    pub auth_audience: Option<String>,
    pub auth_client_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let auth_keys = match (
            std::env::var("AUTH_HS256_SECRET").ok(),
            std::env::var("AUTH_JWKS_URL").ok(),
        ) {
            (_, Some(url)) => TokenKeySource::Jwks(url),
            (Some(secret), None) => TokenKeySource::Secret(secret),
            (None, None) => {
                return Err(ConfigError::MissingEnvVar(
                    "AUTH_JWKS_URL or AUTH_HS256_SECRET".to_string(),
                )
                .into())
            }
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            auth_keys,
            auth_issuer: std::env::var("AUTH_ISSUER").ok(),
            auth_audience: std::env::var("AUTH_AUDIENCE").ok(),
            auth_client_id: std::env::var("AUTH_CLIENT_ID")
                .unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string()),
        })
    }
}
