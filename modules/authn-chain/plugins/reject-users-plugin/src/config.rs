//! Configuration for the reject-users handler.

use serde::Deserialize;

/// Handler configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RejectUsersConfig {
    /// Comma-delimited usernames to reject. May be empty (reject nobody).
    ///
    /// Free-form text rather than a structured list so a refresh source can
    /// hand over a raw property value; tokens are trimmed and bad tokens
    /// are dropped, never errored.
    pub users: String,

    /// Match usernames case-insensitively.
    ///
    /// Applied at both load and lookup. Default is exact matching.
    pub case_insensitive: bool,
}
