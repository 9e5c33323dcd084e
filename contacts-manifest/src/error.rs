//! Error types for contacts-manifest.

use std::path::PathBuf;

use thiserror::Error;

use contacts_core::ContactError;

/// All errors that can arise from manifest and report operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file did not exist at the expected path.
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two sibling modules share a name.
    #[error("duplicate module '{path}' in manifest")]
    DuplicateModule { path: String },

    /// A contact declaration was rejected by the registry.
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (report emission).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error (report emission).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`ManifestError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ManifestError {
    ManifestError::Io {
        path: path.into(),
        source,
    }
}
