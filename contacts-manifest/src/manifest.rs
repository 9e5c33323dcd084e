//! Workspace contact manifest (`contacts.yaml`).
//!
//! # Layout
//!
//! ```yaml
//! version: 1
//! project:
//!   name: widgets
//!   contacts:
//!     - email: owner@example.com
//!       moniker: Widgets maintainers
//!       github: widgets-dev
//!       roles: [owner]
//!   modules:
//!     - name: api
//!       contacts:
//!         - email: api@example.com
//!           roles: [notify]
//! ```
//!
//! Declarations are applied through [`contacts_core::ContactRegistry::add_or_merge`]
//! (one call per contact block) and [`ContactRegistry::add_role`] (one per role
//! label), so re-declaring an email within one module extends the earlier
//! declaration instead of duplicating it, and key validation is the registry's.
//!
//! [`ContactRegistry::add_role`]: contacts_core::ContactRegistry::add_role

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use contacts_core::{ContactFields, NodeId, ProjectTree};

use crate::error::{io_err, ManifestError};

/// Default manifest file name at the workspace root.
pub const MANIFEST_FILE: &str = "contacts.yaml";

/// One declared contact within a module block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDecl {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// One module block: own declarations plus nested submodules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub name: String,
    #[serde(default)]
    pub contacts: Vec<ContactDecl>,
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,
}

/// Root of the `contacts.yaml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub project: ModuleDecl,
}

/// Load a manifest from `path`.
///
/// Returns `ManifestError::NotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed YAML.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let manifest: Manifest = serde_yaml::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(
        "loaded manifest '{}' (version {})",
        path.display(),
        manifest.version
    );
    Ok(manifest)
}

/// Build the module tree from a loaded manifest.
///
/// Walks the nested module blocks depth-first, applying every contact
/// declaration through the registry merge rule. Sibling module names must be
/// unique; violations surface as `ManifestError::DuplicateModule` with the
/// colon-separated module path.
pub fn build_tree(manifest: &Manifest) -> Result<ProjectTree, ManifestError> {
    let mut tree = ProjectTree::new(manifest.project.name.as_str());
    let root = tree.root();
    apply_module(&mut tree, root, &manifest.project.name, &manifest.project)?;
    tracing::debug!("built module tree: {} module(s)", tree.len());
    Ok(tree)
}

fn apply_module(
    tree: &mut ProjectTree,
    id: NodeId,
    path: &str,
    decl: &ModuleDecl,
) -> Result<(), ManifestError> {
    for contact in &decl.contacts {
        let fields = ContactFields {
            moniker: contact.moniker.clone(),
            github: contact.github.clone(),
            twitter: contact.twitter.clone(),
            ..ContactFields::default()
        };
        tree[id].contacts.add_or_merge(&contact.email, fields)?;
        for role in &contact.roles {
            tree[id].contacts.add_role(&contact.email, role)?;
        }
    }

    let mut seen = BTreeSet::new();
    for module in &decl.modules {
        let child_path = format!("{path}:{}", module.name);
        if !seen.insert(module.name.as_str()) {
            return Err(ManifestError::DuplicateModule { path: child_path });
        }
        let child = tree.add_child(id, module.name.as_str());
        apply_module(tree, child, &child_path, module)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
