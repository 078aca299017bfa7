//! Domain layer for the reject-users handler.

pub mod client;
pub mod service;
pub mod store;

pub use client::HANDLER_NAME;
pub use service::Service;
pub use store::{RejectListStore, RejectSet};
