//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use contacts_core::ProjectTree;
use contacts_manifest::{build_tree, load_manifest, MANIFEST_FILE};

pub mod list;
pub mod report;
pub mod validate;

/// Resolve the manifest path: explicit flag, else `contacts.yaml` in the
/// current directory.
pub(crate) fn manifest_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(MANIFEST_FILE))
}

/// Load the manifest at `path` and build the module tree.
pub(crate) fn load_tree(path: &Path) -> Result<ProjectTree> {
    let manifest = load_manifest(path)
        .with_context(|| format!("failed to load manifest '{}'", path.display()))?;
    build_tree(&manifest)
        .with_context(|| format!("invalid contact configuration in '{}'", path.display()))
}
