//! `AuthenticationHandler` implementation for the reject-users service.

use async_trait::async_trait;
use authn_chain_sdk::{AuthenticationHandler, Credential, HandlerOutcome};

use super::service::Service;

/// Handler name advertised to chain configuration and logs.
pub const HANDLER_NAME: &str = "reject-users-handler";

#[async_trait]
impl AuthenticationHandler for Service {
    fn name(&self) -> &str {
        HANDLER_NAME
    }

    fn supports(&self, credential: &Credential) -> bool {
        matches!(credential, Credential::UsernamePassword(_))
    }

    async fn authenticate(&self, credential: &Credential) -> HandlerOutcome {
        self.decide(credential)
    }
}
