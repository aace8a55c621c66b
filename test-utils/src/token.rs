//! Bearer tokens shaped like the identity provider's access tokens.
//!
//! Tokens are signed with HS256 using [`TEST_SECRET`], which the server accepts when
//! configured with the same shared secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Map, Value};

use crate::error::TestError;

/// Shared secret used to sign test tokens.
pub const TEST_SECRET: &str = "padel-club-test-secret";

/// Client whose `resource_access` roles the server reads by default.
pub const TEST_CLIENT_ID: &str = "padel-backend";

/// Factory for signed access tokens with customizable claims.
///
/// # Example
///
/// ```rust,ignore
/// let token = TokenFactory::new("user-a")
///     .realm_role("club-user")
///     .build()?;
/// ```
pub struct TokenFactory {
    subject: String,
    realm_roles: Vec<String>,
    client_roles: Vec<String>,
    client_id: String,
    issuer: Option<String>,
    audience: Option<String>,
    expires_in: Duration,
    secret: String,
}

impl TokenFactory {
    /// Creates a new TokenFactory with default values.
    ///
    /// Defaults:
    /// - no roles
    /// - client: [`TEST_CLIENT_ID`]
    /// - no issuer or audience claim
    /// - expires in 1 hour
    /// - signed with [`TEST_SECRET`]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            realm_roles: Vec::new(),
            client_roles: Vec::new(),
            client_id: TEST_CLIENT_ID.to_string(),
            issuer: None,
            audience: None,
            expires_in: Duration::hours(1),
            secret: TEST_SECRET.to_string(),
        }
    }

    /// Adds a role to `realm_access.roles`.
    pub fn realm_role(mut self, role: impl Into<String>) -> Self {
        self.realm_roles.push(role.into());
        self
    }

    /// Adds a role to `resource_access.<client>.roles`.
    pub fn client_role(mut self, role: impl Into<String>) -> Self {
        self.client_roles.push(role.into());
        self
    }

    /// Sets the client the client roles are granted for.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the lifetime relative to now. Negative values produce an expired token.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Sets the signing secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Signs the token.
    pub fn build(self) -> Result<String, TestError> {
        let now = Utc::now();

        let mut claims = Map::new();
        claims.insert("sub".to_string(), json!(self.subject));
        claims.insert("iat".to_string(), json!(now.timestamp()));
        claims.insert(
            "exp".to_string(),
            json!((now + self.expires_in).timestamp()),
        );
        claims.insert(
            "realm_access".to_string(),
            json!({ "roles": self.realm_roles }),
        );
        let mut resource_access = Map::new();
        resource_access.insert(self.client_id, json!({ "roles": self.client_roles }));
        claims.insert(
            "resource_access".to_string(),
            Value::Object(resource_access),
        );
        if let Some(issuer) = self.issuer {
            claims.insert("iss".to_string(), json!(issuer));
        }
        if let Some(audience) = self.audience {
            claims.insert("aud".to_string(), json!(audience));
        }

        let token = encode(
            &Header::default(),
            &Value::Object(claims),
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}

/// Signs a token for `subject` holding the given realm roles.
pub fn issue_token(subject: &str, roles: &[&str]) -> Result<String, TestError> {
    roles
        .iter()
        .fold(TokenFactory::new(subject), |factory, role| {
            factory.realm_role(*role)
        })
        .build()
}
