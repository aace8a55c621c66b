//! Caller identity as seen by the booking rules.

/// Capabilities the services need from an authenticated caller.
///
/// Implemented by `Principal` for verified bearer tokens; tests may implement it directly.
pub trait Identity {
    /// Opaque subject identifier issued by the identity provider.
    fn subject_id(&self) -> &str;

    /// Whether the caller holds the named role.
    fn has_role(&self, role: &str) -> bool;
}

/// Verified identity extracted from a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    /// `sub` claim of the token.
    pub subject: String,
    /// Realm roles plus the roles granted for this backend's client.
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            roles,
        }
    }
}

impl Identity for Principal {
    fn subject_id(&self) -> &str {
        &self.subject
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
