//! Contacts core library — domain types, per-module registry, tree aggregation.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ContactError`]
//! - [`registry`] — [`ContactRegistry`] add / merge / iterate
//! - [`tree`] — read-only module tree view
//! - [`aggregate`] — [`effective_contacts`]

pub mod aggregate;
pub mod error;
pub mod registry;
pub mod tree;
pub mod types;

pub use aggregate::effective_contacts;
pub use error::ContactError;
pub use registry::ContactRegistry;
pub use tree::{NodeId, ProjectNode, ProjectTree};
pub use types::{Contact, ContactFields, ContactKey, ModuleName};
