//! Decision logic for the reject-users handler.

use std::sync::Arc;

use authn_chain_sdk::{
    Credential, HandlerError, HandlerOutcome, PrincipalFactory, RejectionReason,
    SimplePrincipalFactory,
};

use super::store::RejectListStore;
use crate::config::RejectUsersConfig;

/// Reject-users decision service.
///
/// Blocks identities on the configured list and certifies everyone else.
/// The credential's secret is never inspected; credential *correctness* is
/// another handler's job.
pub struct Service {
    store: Arc<RejectListStore>,
    principal_factory: Arc<dyn PrincipalFactory>,
}

impl Service {
    /// Service over an existing store and principal factory.
    ///
    /// The store may still be uninitialized; decisions then come back as
    /// transient faults until the first [`reload`](Self::reload).
    #[must_use]
    pub fn new(store: Arc<RejectListStore>, principal_factory: Arc<dyn PrincipalFactory>) -> Self {
        Self {
            store,
            principal_factory,
        }
    }

    /// Service initialized from configuration, with the default
    /// principal factory.
    #[must_use]
    pub fn from_config(cfg: &RejectUsersConfig) -> Self {
        let store = Arc::new(RejectListStore::new(cfg.case_insensitive));
        store.load(&cfg.users);
        Self::new(store, Arc::new(SimplePrincipalFactory))
    }

    /// Replace the reject list from fresh configuration text.
    ///
    /// Non-blocking for concurrent [`decide`](Self::decide) calls; in-flight
    /// decisions keep the snapshot they started with.
    pub fn reload(&self, config_text: &str) {
        self.store.load(config_text);
    }

    /// The store backing this service.
    #[must_use]
    pub fn store(&self) -> &Arc<RejectListStore> {
        &self.store
    }

    /// Decide on a credential.
    ///
    /// A blocked username is a definitive rejection; any other username is
    /// accepted through the principal factory; an uninitialized store or a
    /// factory fault is a transient error. No state is mutated.
    #[must_use]
    pub fn decide(&self, credential: &Credential) -> HandlerOutcome {
        let Credential::UsernamePassword(login) = credential else {
            return HandlerOutcome::Errored {
                cause: HandlerError::UnsupportedCredential(credential.kind()),
            };
        };

        let Some(set) = self.store.current() else {
            return HandlerOutcome::Errored {
                cause: HandlerError::ConfigurationNotLoaded,
            };
        };

        let username = login.username();
        if set.contains(username) {
            tracing::debug!(username, "username is on the reject list");
            return HandlerOutcome::Rejected {
                reason: RejectionReason::BlockedUsername,
            };
        }

        match self.principal_factory.create_principal(username) {
            Ok(principal) => HandlerOutcome::Accepted { principal },
            Err(e) => HandlerOutcome::Errored { cause: e.into() },
        }
    }
}
