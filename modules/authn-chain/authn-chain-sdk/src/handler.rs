//! The handler contract every chain link implements.

use async_trait::async_trait;

use crate::credential::Credential;
use crate::outcome::HandlerOutcome;

/// One link in an authentication chain.
///
/// The orchestrator invokes handlers in order, routing each credential only
/// to handlers whose [`supports`](AuthenticationHandler::supports) claim
/// matches, and branches on the returned [`HandlerOutcome`] via
/// [`HandlerOutcome::disposition`]:
///
/// - [`Rejected`](HandlerOutcome::Rejected) aborts the attempt. It is a
///   definitive security decision, never a cue to try the next handler.
/// - [`Errored`](HandlerOutcome::Errored) is transient; the next handler
///   may try, or the attempt may be surfaced as retryable.
/// - [`Accepted`](HandlerOutcome::Accepted) resolves this handler's view;
///   whether remaining handlers still run is orchestrator policy.
///
/// Implementations must be safe to call concurrently from many requests
/// and must not mutate state during `authenticate`.
#[async_trait]
pub trait AuthenticationHandler: Send + Sync {
    /// Stable handler name for chain configuration and logs.
    fn name(&self) -> &str;

    /// Capability check: can this handler process the credential's kind?
    ///
    /// The orchestrator must not invoke
    /// [`authenticate`](AuthenticationHandler::authenticate) for
    /// credentials this returns `false` for.
    fn supports(&self, credential: &Credential) -> bool;

    /// Decide on a credential this handler supports.
    async fn authenticate(&self, credential: &Credential) -> HandlerOutcome;
}
