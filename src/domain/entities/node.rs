//! Node entity - one element of a selection tree
//!
//! A node is identified by its `(display_name, value)` pair. Position in the
//! tree (parent, children) and the `checked` flag never take part in equality,
//! so a node can be looked up in a tree by identity alone.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Handle to a node slot inside a [`Tree`](super::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in a selection tree
#[derive(Debug, Clone)]
pub struct Node {
    display_name: String,
    value: String,
    /// Opaque caller payload, carried but never interpreted
    tag: Option<serde_json::Value>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) checked: bool,
}

impl Node {
    /// Create a detached, unchecked node
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            tag: None,
            parent: None,
            children: Vec::new(),
            checked: false,
        }
    }

    /// Create a detached node carrying a payload
    pub fn with_tag(
        display_name: impl Into<String>,
        value: impl Into<String>,
        tag: serde_json::Value,
    ) -> Self {
        Self {
            tag: Some(tag),
            ..Self::new(display_name, value)
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tag(&self) -> Option<&serde_json::Value> {
        self.tag.as_ref()
    }

    pub fn set_tag(&mut self, tag: Option<serde_json::Value>) {
        self.tag = tag;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// A node without a parent is the root of its tree (or detached)
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Detached copy holding only the identity fields
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            display_name: self.display_name.clone(),
            value: self.value.clone(),
        }
    }

    /// Whether `other` has the same identity as this node
    pub fn same_identity(&self, other: &Node) -> bool {
        self.display_name == other.display_name && self.value == other.value
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.display_name.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node{{displayName='{}', value='{}'}}",
            self.display_name, self.value
        )
    }
}

/// Value snapshot of a node's identity, detached from any tree.
///
/// Reported selections are made of snapshots so that later mutation of the
/// live tree cannot change a result the caller already holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub display_name: String,
    pub value: String,
}

impl NodeSnapshot {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        node.snapshot()
    }
}

impl From<NodeSnapshot> for Node {
    fn from(snapshot: NodeSnapshot) -> Self {
        Node::new(snapshot.display_name, snapshot.value)
    }
}
