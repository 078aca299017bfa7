//! Tagged per-call outcome and its chain semantics.

use std::fmt;

use crate::error::HandlerError;
use crate::principal::Principal;

/// Result of one `authenticate` call.
///
/// Returned by value so orchestrators branch on outcome kind rather than
/// catching error types. Produced once per call; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// The handler certifies the credential and resolved a principal.
    Accepted {
        /// Identity resolved for the certified credential.
        principal: Principal,
    },
    /// Definitive refusal: the identity is explicitly disallowed.
    ///
    /// Distinct from "credentials were merely wrong" and fatal to the whole
    /// attempt: the chain must not try other handlers after this.
    Rejected {
        /// Machine-readable reason the orchestrator maps to its
        /// user-facing denial policy.
        reason: RejectionReason,
    },
    /// Transient fault: the handler could not reach a decision.
    Errored {
        /// What went wrong on the lookup path.
        cause: HandlerError,
    },
}

impl HandlerOutcome {
    /// What the chain orchestrator must do with this outcome.
    #[must_use]
    pub const fn disposition(&self) -> ChainDisposition {
        match self {
            Self::Accepted { .. } => ChainDisposition::Resolved,
            Self::Rejected { .. } => ChainDisposition::Halt,
            Self::Errored { .. } => ChainDisposition::FallThrough,
        }
    }

    /// True when this outcome must terminate the whole attempt.
    #[must_use]
    pub const fn is_chain_fatal(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// True when this outcome is a fault rather than a decision.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Errored { .. })
    }
}

/// Why a handler definitively refused a credential.
///
/// A closed enum rather than free text so orchestrator policy (including
/// "never reveal blocked-vs-bad-password to the user") can match on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The username is on the configured reject list.
    BlockedUsername,
}

impl RejectionReason {
    /// Stable reason code for orchestrator policy and audit logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlockedUsername => "blocked-username",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the orchestrator must treat a handler outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainDisposition {
    /// This handler's view is resolved; whether remaining handlers still
    /// run is orchestrator policy, never forced by the handler.
    Resolved,
    /// Abort the attempt. No further handlers may run for this credential.
    Halt,
    /// This handler could not decide; the next handler may try, or the
    /// attempt may be retried later.
    FallThrough,
}
