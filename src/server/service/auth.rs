//! Bearer token verification against the identity provider's signing keys.
//!
//! Tokens are expected in the shape issued by Keycloak: the subject in `sub`, realm roles
//! under `realm_access.roles` and per-client roles under `resource_access.<client>.roles`.
//! Keys are either a shared HS256 secret or the realm's JWKS, fetched once at startup.

use jsonwebtoken::{
    decode, decode_header,
    jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm, PublicKeyUse},
    Algorithm, DecodingKey, Validation,
};
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

use crate::server::{
    config::{Config, TokenKeySource},
    error::{auth::AuthError, config::ConfigError, AppError},
    model::auth::Principal,
};

/// A key the verifier accepts signatures from.
#[derive(Clone)]
struct VerificationKey {
    /// Key ID from the JWKS; `None` matches any token `kid`.
    kid: Option<String>,
    algorithm: Algorithm,
    key: DecodingKey,
}

#[derive(Debug, Default, Deserialize)]
struct RoleClaim {
    #[serde(default)]
    roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    #[serde(default)]
    realm_access: Option<RoleClaim>,
    #[serde(default)]
    resource_access: HashMap<String, RoleClaim>,
}

/// Verifies identity provider access tokens and extracts the caller's principal.
///
/// Cheap to clone; keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<Vec<VerificationKey>>,
    issuer: Option<String>,
    audience: Option<String>,
    client_id: String,
}

impl TokenVerifier {
    /// Creates a verifier accepting HS256 tokens signed with a shared secret.
    pub fn from_secret(secret: &str, client_id: impl Into<String>) -> Self {
        let key = VerificationKey {
            kid: None,
            algorithm: Algorithm::HS256,
            key: DecodingKey::from_secret(secret.as_bytes()),
        };

        Self {
            keys: Arc::new(vec![key]),
            issuer: None,
            audience: None,
            client_id: client_id.into(),
        }
    }

    /// Creates a verifier from a JWKS document.
    ///
    /// Encryption keys and keys with an algorithm that cannot verify signatures are skipped.
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - At least one usable signing key was found
    /// - `Err(ConfigError::NoSigningKeys)` - The key set contains no usable key
    pub fn from_jwks(
        jwks: &JwkSet,
        source: &str,
        client_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let keys: Vec<VerificationKey> = jwks
            .keys
            .iter()
            .filter_map(|jwk| {
                let key = verification_key(jwk);
                if key.is_none() {
                    tracing::debug!(
                        "Skipping JWKS key {:?} from {}",
                        jwk.common.key_id,
                        source
                    );
                }
                key
            })
            .collect();

        if keys.is_empty() {
            return Err(ConfigError::NoSigningKeys(source.to_string()));
        }

        Ok(Self {
            keys: Arc::new(keys),
            issuer: None,
            audience: None,
            client_id: client_id.into(),
        })
    }

    /// Builds the verifier described by the configuration, fetching the JWKS if needed.
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - Verifier ready to authenticate requests
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch or decode the JWKS
    /// - `Err(AppError::ConfigErr)` - The JWKS contains no usable signing key
    pub async fn from_config(
        config: &Config,
        http_client: &reqwest::Client,
    ) -> Result<Self, AppError> {
        let verifier = match &config.auth_keys {
            TokenKeySource::Secret(secret) => {
                Self::from_secret(secret, config.auth_client_id.clone())
            }
            TokenKeySource::Jwks(url) => {
                let jwks: JwkSet = http_client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;

                let verifier = Self::from_jwks(&jwks, url, config.auth_client_id.clone())?;
                tracing::info!(
                    "Loaded {} token signing key(s) from {}",
                    verifier.key_count(),
                    url
                );

                verifier
            }
        };

        Ok(verifier
            .with_issuer(config.auth_issuer.clone())
            .with_audience(config.auth_audience.clone()))
    }

    /// Number of keys tokens may be signed with.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Requires the `iss` claim to equal `issuer` when set.
    pub fn with_issuer(mut self, issuer: Option<String>) -> Self {
        self.issuer = issuer;
        self
    }

    /// Requires the `aud` claim to contain `audience` when set.
    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = audience;
        self
    }

    /// Verifies a bearer token and returns the identity it carries.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Signature, expiry and configured issuer/audience are valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, or failing validation
    /// - `Err(AuthError::UnknownSigningKey)` - No configured key matches the token header
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let header = decode_header(token)?;

        let key = self
            .keys
            .iter()
            .find(|k| {
                k.algorithm == header.alg
                    && (k.kid.is_none() || k.kid.as_deref() == header.kid.as_deref())
            })
            .ok_or_else(|| AuthError::UnknownSigningKey(header.kid.clone()))?;

        let mut validation = Validation::new(key.algorithm);
        let mut required = vec!["exp"];
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match &self.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        validation.set_required_spec_claims(&required);

        let claims = decode::<AccessTokenClaims>(token, &key.key, &validation)?.claims;

        Ok(self.principal_from_claims(claims))
    }

    fn principal_from_claims(&self, mut claims: AccessTokenClaims) -> Principal {
        let mut roles = claims.realm_access.take().unwrap_or_default().roles;

        if let Some(client) = claims.resource_access.remove(&self.client_id) {
            for role in client.roles {
                if !roles.contains(&role) {
                    roles.push(role);
                }
            }
        }

        Principal::new(claims.sub, roles)
    }
}

/// Converts a JWK into a verification key if it can verify token signatures.
fn verification_key(jwk: &Jwk) -> Option<VerificationKey> {
    if matches!(jwk.common.public_key_use, Some(PublicKeyUse::Encryption)) {
        return None;
    }

    let algorithm = match &jwk.common.key_algorithm {
        Some(alg) => signing_algorithm(alg)?,
        None => match &jwk.algorithm {
            AlgorithmParameters::RSA(_) => Algorithm::RS256,
            AlgorithmParameters::EllipticCurve(_) => Algorithm::ES256,
            AlgorithmParameters::OctetKeyPair(_) => Algorithm::EdDSA,
            _ => return None,
        },
    };

    let key = DecodingKey::from_jwk(jwk).ok()?;

    Some(VerificationKey {
        kid: jwk.common.key_id.clone(),
        algorithm,
        key,
    })
}

fn signing_algorithm(alg: &KeyAlgorithm) -> Option<Algorithm> {
    match alg {
        KeyAlgorithm::RS256 => Some(Algorithm::RS256),
        KeyAlgorithm::RS384 => Some(Algorithm::RS384),
        KeyAlgorithm::RS512 => Some(Algorithm::RS512),
        KeyAlgorithm::PS256 => Some(Algorithm::PS256),
        KeyAlgorithm::PS384 => Some(Algorithm::PS384),
        KeyAlgorithm::PS512 => Some(Algorithm::PS512),
        KeyAlgorithm::ES256 => Some(Algorithm::ES256),
        KeyAlgorithm::ES384 => Some(Algorithm::ES384),
        KeyAlgorithm::EdDSA => Some(Algorithm::EdDSA),
        _ => None,
    }
}
