//! Error taxonomy for chain handlers.

use thiserror::Error;

/// Transient faults a handler can hit while trying to decide.
///
/// These are never definitive security decisions. An orchestrator may try
/// the next handler or surface a retryable error, but must not confuse any
/// of these with a rejection; see
/// [`ChainDisposition`](crate::ChainDisposition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The handler's configuration has never been loaded.
    ///
    /// Returned instead of silently treating a missing reject list as
    /// allow-all, which would admit every user during a startup race.
    #[error("configuration-not-loaded")]
    ConfigurationNotLoaded,

    /// A credential kind this handler never claimed to support reached it.
    ///
    /// Indicates an orchestrator routing fault, not a decision about the
    /// credential itself.
    #[error("unsupported credential kind: {0}")]
    UnsupportedCredential(&'static str),

    /// The principal factory failed on the accept path.
    #[error("principal resolution failed: {0}")]
    PrincipalResolution(String),
}

/// Failure to build a [`Principal`](crate::Principal) from a certified
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PrincipalError(pub String);

impl From<PrincipalError> for HandlerError {
    fn from(e: PrincipalError) -> Self {
        Self::PrincipalResolution(e.0)
    }
}
