//! Principal model and the identity-resolution seam.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PrincipalError;

/// The resolved identity of an authenticated subject.
///
/// Handlers certify an identifier; they do not construct identity state
/// themselves. A [`PrincipalFactory`] builds this object on the accept
/// path, optionally attaching resolved attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    attributes: HashMap<String, serde_json::Value>,
}

impl Principal {
    /// Principal with the given identifier and no attributes.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            attributes: HashMap::new(),
        }
    }

    /// Attach resolved attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: HashMap<String, serde_json::Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// The opaque identifier this principal was resolved from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolved attributes, empty unless a factory attached any.
    #[must_use]
    pub fn attributes(&self) -> &HashMap<String, serde_json::Value> {
        &self.attributes
    }
}

/// Maps a certified identifier to a full [`Principal`].
///
/// Invoked by handlers only on the accept path; how identity state is
/// resolved (directory lookup, attribute repositories) is the
/// implementation's concern.
pub trait PrincipalFactory: Send + Sync {
    /// Build the principal for an identifier that passed the handler's
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipalError`] when identity state cannot be resolved;
    /// handlers surface this as a transient outcome, not a rejection.
    fn create_principal(&self, id: &str) -> Result<Principal, PrincipalError>;
}

/// Factory producing an id-only principal with no attributes.
///
/// The default collaborator for handlers that only certify identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePrincipalFactory;

impl PrincipalFactory for SimplePrincipalFactory {
    fn create_principal(&self, id: &str) -> Result<Principal, PrincipalError> {
        Ok(Principal::new(id))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn simple_factory_produces_id_only_principal() {
        let principal = SimplePrincipalFactory.create_principal("alice").unwrap();

        assert_eq!(principal.id(), "alice");
        assert!(principal.attributes().is_empty());
    }

    #[test]
    fn attributes_round_trip() {
        let mut attributes = HashMap::new();
        attributes.insert("display_name".to_owned(), serde_json::json!("Alice"));

        let principal = Principal::new("alice").with_attributes(attributes);

        assert_eq!(
            principal.attributes().get("display_name"),
            Some(&serde_json::json!("Alice"))
        );
    }
}
