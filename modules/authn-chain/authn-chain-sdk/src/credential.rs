//! Credential kinds routed through the authentication chain.

use secrecy::SecretString;

/// A claimed identity plus proof material presented for authentication.
///
/// Handlers declare which kinds they can process via
/// [`AuthenticationHandler::supports`](crate::AuthenticationHandler::supports);
/// the orchestrator routes a credential only to handlers that claim it.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Username plus secret, the classic login-form shape.
    UsernamePassword(UsernamePasswordCredential),
    /// An opaque bearer token (API tokens, session handles).
    BearerToken(BearerTokenCredential),
}

impl Credential {
    /// Shorthand for a username/password credential.
    #[must_use]
    pub fn username_password(username: &str, password: impl Into<SecretString>) -> Self {
        Self::UsernamePassword(UsernamePasswordCredential::new(username, password))
    }

    /// Shorthand for a bearer-token credential.
    #[must_use]
    pub fn bearer_token(token: impl Into<SecretString>) -> Self {
        Self::BearerToken(BearerTokenCredential::new(token))
    }

    /// Stable kind label, used in capability errors and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UsernamePassword(_) => "username-password",
            Self::BearerToken(_) => "bearer-token",
        }
    }
}

/// Username plus secret.
///
/// The secret is wrapped in [`SecretString`] so `Debug` redacts it
/// automatically; handlers that only gate on identity never unwrap it.
#[derive(Debug, Clone)]
pub struct UsernamePasswordCredential {
    username: String,
    password: SecretString,
}

impl UsernamePasswordCredential {
    /// Create a credential from a username and its proof material.
    #[must_use]
    pub fn new(username: &str, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.to_owned(),
            password: password.into(),
        }
    }

    /// The claimed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The secret, still wrapped; callers must opt in to expose it.
    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// An opaque bearer token.
#[derive(Debug, Clone)]
pub struct BearerTokenCredential {
    token: SecretString,
}

impl BearerTokenCredential {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(token: impl Into<SecretString>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The token, still wrapped; callers must opt in to expose it.
    #[must_use]
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}
