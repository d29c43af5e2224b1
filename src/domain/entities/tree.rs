//! Tree entity - arena of nodes with a single root
//!
//! Ownership flows strictly from parent to children. Each node keeps a
//! non-owning `parent` handle that is maintained by [`Tree::add_child`],
//! [`Tree::attach`], [`Tree::remove_child`] and [`Tree::format_tree`].
//!
//! Removed subtrees stay in the arena as detached nodes; they can be
//! re-attached with [`Tree::attach`].

use super::node::{Node, NodeId};
use super::raw_node::RawNode;

/// A rooted selection tree
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    /// Create a tree whose root is `root`
    ///
    /// Any position the node carried is discarded; its checked flag is kept.
    pub fn new(mut root: Node) -> Self {
        root.parent = None;
        root.children.clear();
        Self {
            nodes: vec![root],
            root: Some(NodeId(0)),
        }
    }

    /// A tree with no root
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tree from raw input and normalize it
    pub fn from_raw(raw: RawNode) -> Self {
        let mut tree = Self::empty();
        let mut stack: Vec<(RawNode, Option<NodeId>)> = vec![(raw, None)];

        while let Some((raw, parent)) = stack.pop() {
            let mut node = Node::new(raw.display_name, raw.value);
            node.set_tag(raw.tag);
            node.checked = raw.checked;

            let id = tree.push(node);
            match parent {
                Some(parent) => tree.nodes[parent.0].children.push(id),
                None => tree.root = Some(id),
            }

            // An absent children field and an empty one both become a leaf.
            let children = raw.children.unwrap_or_default();
            for child in children.into_iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        tree.format_tree();
        tree
    }

    /// Normalization pass: make every child's parent handle point at the
    /// node that lists it. Idempotent.
    pub fn format_tree(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        self.nodes[root.0].parent = None;

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let children = self.nodes[id.0].children.clone();
            for child in children.into_iter().rev() {
                self.nodes[child.0].parent = Some(id);
                stack.push(child);
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of arena slots, detached nodes included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Borrow a node by handle
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].is_leaf()
    }

    /// Whether `id` is a branch node (has at least one child)
    pub fn is_branch(&self, id: NodeId) -> bool {
        !self.is_leaf(id)
    }

    /// Iterate over every arena slot, detached nodes included
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Append `child` under `parent`, unchecked
    ///
    /// Returns `None` without changing the tree when `parent` already has a
    /// child with the same identity.
    pub fn add_child(&mut self, parent: NodeId, mut child: Node) -> Option<NodeId> {
        if self.find_child(parent, &child).is_some() {
            return None;
        }
        child.parent = Some(parent);
        child.children.clear();
        child.checked = false;
        let id = self.push(child);
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    /// Re-attach a detached node (and its subtree) under `parent`
    ///
    /// The incoming subtree arrives with every checked flag cleared.
    ///
    /// Returns `false` without changing the tree if `child` is the root, is
    /// already attached somewhere, is `parent` itself or one of its
    /// ancestors, or duplicates one of `parent`'s children.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child.0 >= self.nodes.len() || Some(child) == self.root {
            return false;
        }
        if self.nodes[child.0].parent.is_some() {
            return false;
        }
        if self.ancestors_inclusive(parent).any(|id| id == child) {
            return false;
        }
        if self.nodes[parent.0].children.contains(&child)
            || self.find_child(parent, &self.nodes[child.0]).is_some()
        {
            return false;
        }
        self.uncheck_subtree(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Detach `child` from `parent`
    ///
    /// The detached subtree is left unchecked. If it carried the checked
    /// path, the ancestors left behind are unchecked too, so the tree ends
    /// up with no selection rather than a path without a leaf.
    ///
    /// Returns `false` if `child` is not one of `parent`'s children.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        let Some(pos) = children.iter().position(|&c| c == child) else {
            return false;
        };
        children.remove(pos);
        self.nodes[child.0].parent = None;

        if self.uncheck_subtree(child) {
            let mut current = Some(parent);
            while let Some(id) = current {
                let node = &mut self.nodes[id.0];
                node.checked = false;
                current = node.parent;
            }
        }
        true
    }

    /// Clear every checked flag under `from`, inclusive; returns whether any was set
    fn uncheck_subtree(&mut self, from: NodeId) -> bool {
        let mut cleared = false;
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id.0];
            cleared |= std::mem::replace(&mut node.checked, false);
            stack.extend(node.children.iter().copied());
        }
        cleared
    }

    /// The child of `parent` with the same identity as `target`, if any
    pub fn find_child(&self, parent: NodeId, target: &Node) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0] == *target)
    }

    /// `id`, then its parent, up to the topmost ancestor
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.nodes[current.0].parent)
    }

    /// Number of edges between `id` and its topmost ancestor
    pub fn height(&self, id: NodeId) -> usize {
        self.ancestors_inclusive(id).count() - 1
    }

    /// Topmost ancestor of `id`
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors_inclusive(id).last().unwrap_or(id)
    }

    /// Whether `id` is reachable from this tree's root
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len() && Some(self.root_of(id)) == self.root
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl From<RawNode> for Tree {
    fn from(raw: RawNode) -> Self {
        Self::from_raw(raw)
    }
}
