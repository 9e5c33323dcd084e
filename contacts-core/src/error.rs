//! Error types for contacts-core.

use thiserror::Error;

/// All errors that can arise from registry and aggregation operations.
#[derive(Debug, Error)]
pub enum ContactError {
    /// The identifying key is empty or not an email-like string.
    #[error("invalid contact key '{key}': expected an email-like address")]
    InvalidKey { key: String },

    /// A role was assigned to a key never declared in this registry.
    #[error("unknown contact '{key}': declare it before assigning roles")]
    UnknownContact { key: String },

    /// A node id (or an ancestor along its chain) does not resolve in the
    /// supplied tree.
    #[error("detached node: id {index} does not resolve in this project tree")]
    DetachedNode { index: usize },
}
