#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Authentication chain SDK
//!
//! Shared vocabulary for pluggable credential-authentication handlers:
//!
//! - [`AuthenticationHandler`] - Handler trait every chain link implements
//! - [`Credential`] - Credential kinds routed through the chain
//! - [`HandlerOutcome`] - Tagged per-call outcome with chain disposition
//! - [`HandlerError`] - Transient fault taxonomy
//! - [`Principal`] / [`PrincipalFactory`] - Identity resolution seam
//!
//! ## Chain contract
//!
//! The chain orchestrator invokes handlers in order and branches on the
//! returned outcome, not on error types:
//!
//! ```
//! use authn_chain_sdk::{ChainDisposition, HandlerOutcome, RejectionReason};
//!
//! let outcome = HandlerOutcome::Rejected {
//!     reason: RejectionReason::BlockedUsername,
//! };
//!
//! // A definitive rejection aborts the whole attempt; the orchestrator
//! // must not fall through to the next handler.
//! assert_eq!(outcome.disposition(), ChainDisposition::Halt);
//! ```

pub mod credential;
pub mod error;
pub mod handler;
pub mod outcome;
pub mod principal;

// Re-export main types at crate root
pub use credential::{BearerTokenCredential, Credential, UsernamePasswordCredential};
pub use error::{HandlerError, PrincipalError};
pub use handler::AuthenticationHandler;
pub use outcome::{ChainDisposition, HandlerOutcome, RejectionReason};
pub use principal::{Principal, PrincipalFactory, SimplePrincipalFactory};
