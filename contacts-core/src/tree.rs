//! Read-only module tree view.
//!
//! The host configuration model is kept out of the core: the tree is an arena
//! of nodes addressed by integer [`NodeId`]s, each holding at most one parent
//! reference and its own [`ContactRegistry`]. The manifest layer builds the
//! tree once during configuration; aggregation only reads it.
//!
//! Node 0 is always the root.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::registry::ContactRegistry;
use crate::types::ModuleName;

/// Index of a node within a [`ProjectTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One module in the tree: name, optional parent, own contact registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub name: ModuleName,
    /// Non-owning back-reference; `None` for the root.
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub contacts: ContactRegistry,
}

/// Arena of [`ProjectNode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTree {
    nodes: Vec<ProjectNode>,
}

impl ProjectTree {
    /// Create a tree containing only the root module.
    pub fn new(root_name: impl Into<ModuleName>) -> Self {
        Self {
            nodes: vec![ProjectNode {
                name: root_name.into(),
                parent: None,
                contacts: ContactRegistry::new(),
            }],
        }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child module under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<ModuleName>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ProjectNode {
            name: name.into(),
            parent: Some(parent),
            contacts: ContactRegistry::new(),
        });
        id
    }

    /// The node at `id`, or `None` for a stale id.
    pub fn get(&self, id: NodeId) -> Option<&ProjectNode> {
        self.nodes.get(id.0)
    }

    /// Number of modules in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the tree holds no nodes (only possible for deserialized
    /// trees; the constructors always create a root).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Children of `id` in creation order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(idx, _)| NodeId(idx))
    }

    /// Resolve a colon-separated module path (e.g. `"widgets"`,
    /// `"widgets:api"`) to a node id.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut segments = path.split(':');
        let root_segment = segments.next()?;
        if self.nodes.first()?.name.0 != root_segment {
            return None;
        }
        let mut current = self.root();
        for segment in segments {
            current = self
                .children(current)
                .find(|&child| self[child].name.0 == segment)?;
        }
        Some(current)
    }

    /// Colon-separated path from the root to `id`, or `None` for a stale id.
    pub fn qualified_name(&self, id: NodeId) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = self.get(id)?;
        segments.push(current.name.0.clone());
        while let Some(parent) = current.parent {
            // Bounded by node count so a malformed deserialized tree cannot loop.
            if segments.len() >= self.nodes.len() {
                return None;
            }
            current = self.get(parent)?;
            segments.push(current.name.0.clone());
        }
        segments.reverse();
        Some(segments.join(":"))
    }
}

impl Index<NodeId> for ProjectTree {
    type Output = ProjectNode;

    fn index(&self, id: NodeId) -> &ProjectNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for ProjectTree {
    fn index_mut(&mut self, id: NodeId) -> &mut ProjectNode {
        &mut self.nodes[id.0]
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
