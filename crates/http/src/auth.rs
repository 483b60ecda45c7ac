//! Credential collaborators for auth-requiring endpoints.
//!
//! Both public search endpoints are exempt, so the default provider can
//! legitimately hold no credential at all; the trait exists so a real token
//! source (keychain, login flow) can be injected without touching the client.

/// Supplies the bearer token attached to auth-requiring endpoints.
pub trait TokenProvider: Send + Sync {
    /// The current bearer token, if one is available.
    fn bearer_token(&self) -> Option<String>;
}

/// Fixed token handed in at construction time (typically from the
/// environment).
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
