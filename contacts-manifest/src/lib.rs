//! # contacts-manifest
//!
//! Workspace manifest loading, tree construction, and report emission.
//!
//! Call [`load_manifest`] + [`build_tree`] to turn a `contacts.yaml` into a
//! [`contacts_core::ProjectTree`], then [`build_report`] / [`write_report`]
//! to emit every module's effective contacts for downstream tooling.

pub mod error;
pub mod manifest;
pub mod report;

pub use error::ManifestError;
pub use manifest::{build_tree, load_manifest, ContactDecl, Manifest, ModuleDecl, MANIFEST_FILE};
pub use report::{
    build_report, render_report, write_report, ContactReport, ModuleContacts, ReportFormat,
};
