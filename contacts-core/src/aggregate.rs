//! Effective-contact aggregation over the module tree.
//!
//! The effective list at a node is the union of the node's own registry and
//! every ancestor registry, merged root-to-leaf with the registry's own
//! add-or-merge rule: descendants override fields and union roles, and a
//! key's position is fixed where it was first introduced.

use crate::error::ContactError;
use crate::registry::ContactRegistry;
use crate::tree::{NodeId, ProjectNode, ProjectTree};
use crate::types::ContactFields;

/// Compute the contacts visible at `node`: its own declarations merged over
/// everything inherited along the parent chain.
///
/// Siblings and their registries are never consulted. A node with no
/// ancestors and an empty registry yields an empty result.
///
/// Fails with [`ContactError::DetachedNode`] when `node` or an ancestor id
/// does not resolve in `tree`, or when the chain does not terminate within
/// the node count (a stale id against the wrong tree).
pub fn effective_contacts(
    tree: &ProjectTree,
    node: NodeId,
) -> Result<ContactRegistry, ContactError> {
    // Walk leaf-to-root, bounded by the node count.
    let mut chain: Vec<&ProjectNode> = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        if chain.len() == tree.len() {
            return Err(ContactError::DetachedNode { index: id.0 });
        }
        let module = tree
            .get(id)
            .ok_or(ContactError::DetachedNode { index: id.0 })?;
        chain.push(module);
        current = module.parent;
    }

    // Replay root-to-leaf through a fresh registry; the merge rule does the
    // override/union work and keeps first-introduction order.
    let mut effective = ContactRegistry::new();
    for module in chain.into_iter().rev() {
        for contact in module.contacts.all() {
            effective.add_or_merge(contact.key.as_str(), ContactFields::from(contact))?;
        }
    }
    Ok(effective)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
