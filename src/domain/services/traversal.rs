//! Structural traversals over a [`Tree`]
//!
//! All walks use an explicit stack, so deep trees cannot exhaust the call
//! stack. Children are pushed in reverse to keep left-to-right pre-order.

use crate::domain::entities::{Node, NodeId, Tree};

/// Visit every node under `from` (inclusive) in pre-order
pub fn walk_pre_order<F>(tree: &Tree, from: NodeId, mut visit: F)
where
    F: FnMut(NodeId, &Node),
{
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        visit(id, node);
        stack.extend(node.children().iter().rev().copied());
    }
}

/// Mutating pre-order walk; the visitor cannot change tree shape
pub(crate) fn walk_pre_order_mut<F>(tree: &mut Tree, from: NodeId, mut visit: F)
where
    F: FnMut(&mut Node),
{
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        let node = tree.node_mut(id);
        visit(node);
        stack.extend(node.children().iter().rev().copied());
    }
}

/// First node under `from` (inclusive), in pre-order, matching `predicate`
pub fn find_pre_order<P>(tree: &Tree, from: NodeId, mut predicate: P) -> Option<NodeId>
where
    P: FnMut(NodeId, &Node) -> bool,
{
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if predicate(id, node) {
            return Some(id);
        }
        stack.extend(node.children().iter().rev().copied());
    }
    None
}

/// Number of nodes on the longest root-to-leaf path.
///
/// A lone root has depth 1, an empty tree depth 0.
pub fn tree_depth(tree: &Tree) -> usize {
    tree.root().map_or(0, |root| subtree_depth(tree, root))
}

/// [`tree_depth`] for the subtree rooted at `from`
pub fn subtree_depth(tree: &Tree, from: NodeId) -> usize {
    let mut depth = 0;
    let mut stack = vec![(from, 1usize)];
    while let Some((id, level)) = stack.pop() {
        let children = tree.children(id);
        if children.is_empty() {
            depth = depth.max(level);
        } else {
            stack.extend(children.iter().map(|&c| (c, level + 1)));
        }
    }
    log::trace!("depth of subtree {} is {}", from, depth);
    depth
}

/// Largest number of children of any branch node; 0 when there is none
pub fn tree_degree(tree: &Tree) -> usize {
    let Some(root) = tree.root() else {
        return 0;
    };
    let mut degree = 0;
    walk_pre_order(tree, root, |_, node| {
        degree = degree.max(node.children().len());
    });
    degree
}

/// First leaf under `from` (inclusive) in pre-order
pub fn first_leaf_pre_order(tree: &Tree, from: NodeId) -> NodeId {
    // Every finite subtree has at least one leaf.
    find_pre_order(tree, from, |_, node| node.is_leaf()).unwrap_or(from)
}

/// Ids reachable from the root, in pre-order
pub fn pre_order_ids(tree: &Tree) -> Vec<NodeId> {
    let mut ids = Vec::new();
    if let Some(root) = tree.root() {
        walk_pre_order(tree, root, |id, _| ids.push(id));
    }
    ids
}
