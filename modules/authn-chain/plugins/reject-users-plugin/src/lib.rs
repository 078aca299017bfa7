#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Reject-users authentication handler
//!
//! Fails authentication for any username on a configured reject list and
//! blindly certifies every other username, delegating identity resolution
//! to the chain's principal factory. A hit on the list is a definitive
//! security decision: the chain must stop, not try the next handler.
//!
//! The secret carried by the credential is never inspected; this handler
//! gates *identity*, not credential correctness.
//!
//! ## Configuration
//!
//! ```yaml
//! handlers:
//!   reject_users:
//!     config:
//!       users: "anonymous, guest, root"
//!       case_insensitive: false
//! ```
//!
//! The `users` property may be replaced at runtime without a restart
//! ([`Service::reload`]); in-flight authentications keep the snapshot they
//! started with.

pub mod config;
pub mod domain;

pub use config::RejectUsersConfig;
pub use domain::{HANDLER_NAME, RejectListStore, RejectSet, Service};
