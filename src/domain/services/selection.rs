//! Checked-state operations
//!
//! A well-formed tree has either no checked node, or exactly one checked
//! leaf together with every ancestor up to the root and nothing else.
//! [`checked_leaf_or_default`] establishes that shape for fresh data;
//! [`set_single_leaf_checked`] moves it to another leaf.

use crate::domain::entities::{Node, NodeId, NodeSnapshot, Tree};

use super::traversal::{find_pre_order, first_leaf_pre_order, walk_pre_order, walk_pre_order_mut};

/// First checked leaf in pre-order, if any
pub fn find_checked_leaf_pre_order(tree: &Tree) -> Option<NodeId> {
    let root = tree.root()?;
    find_pre_order(tree, root, |_, node| node.is_leaf() && node.is_checked())
}

/// Clear the checked flag on every node reachable from the root
pub fn set_all_unchecked(tree: &mut Tree) {
    if let Some(root) = tree.root() {
        walk_pre_order_mut(tree, root, |node| node.checked = false);
    }
}

/// First node in pre-order with the same identity as `target`
pub fn find_node(tree: &Tree, target: &Node) -> Option<NodeId> {
    let root = tree.root()?;
    find_pre_order(tree, root, |_, node| node == target)
}

/// Make the tree node matching `leaf` the single checked leaf.
///
/// `leaf` is resolved through [`find_node`]. Returns `false` and leaves the
/// tree untouched when no node matches or the match is not a leaf.
pub fn set_single_leaf_checked(tree: &mut Tree, leaf: &Node) -> bool {
    check_matching_leaf(tree, leaf).is_some()
}

/// [`set_single_leaf_checked`], returning the node that was checked
pub fn check_matching_leaf(tree: &mut Tree, leaf: &Node) -> Option<NodeId> {
    let id = find_node(tree, leaf)?;
    set_single_leaf_checked_unverified(tree, id).then_some(id)
}

/// Make the node `leaf` itself the single checked leaf.
///
/// Unlike [`set_single_leaf_checked`] this never resolves by identity, so
/// the exact node is checked even when an earlier node shares its name and
/// value. Returns `false` without mutation when `leaf` is not reachable from
/// the root or has children.
pub fn check_leaf(tree: &mut Tree, leaf: NodeId) -> bool {
    if !tree.contains(leaf) {
        return false;
    }
    set_single_leaf_checked_unverified(tree, leaf)
}

/// Make `leaf` the single checked leaf without looking it up first.
///
/// The caller guarantees `leaf` belongs to this tree. Still refuses (and
/// returns `false`) when `leaf` has children.
pub fn set_single_leaf_checked_unverified(tree: &mut Tree, leaf: NodeId) -> bool {
    if !tree.is_leaf(leaf) {
        return false;
    }
    set_all_unchecked(tree);

    let mut current = Some(leaf);
    while let Some(id) = current {
        let node = tree.node_mut(id);
        node.checked = true;
        current = node.parent();
    }
    log::debug!(
        "checked leaf {} ({})",
        leaf,
        tree.node(leaf).display_name()
    );
    true
}

/// The checked leaf when the tree holds exactly one checked path.
///
/// Returns `None` when nothing is checked, when flags are set off the path
/// of the first checked leaf, or when that path is missing an ancestor.
pub fn single_checked_leaf(tree: &Tree) -> Option<NodeId> {
    let leaf = find_checked_leaf_pre_order(tree)?;
    let path = node_simple_path(tree, leaf);
    if path.first().copied() != tree.root() {
        return None;
    }
    if path.iter().any(|&id| !tree.node(id).is_checked()) {
        return None;
    }
    let checked_total = tree
        .root()
        .map(|root| {
            let mut count = 0;
            walk_pre_order(tree, root, |_, node| {
                if node.is_checked() {
                    count += 1;
                }
            });
            count
        })
        .unwrap_or(0);
    (checked_total == path.len()).then_some(leaf)
}

/// The checked leaf, or the first leaf in pre-order after checking it.
///
/// A complete single path is kept as is. Otherwise the first checked leaf in
/// pre-order wins and its path is rebuilt, so a preselected leaf without
/// checked ancestors survives while stray flags elsewhere are cleared. With
/// no checked leaf at all the first leaf becomes the selection. Afterwards a
/// non-empty tree always has exactly one checked path. Returns `None` only
/// for an empty tree.
pub fn checked_leaf_or_default(tree: &mut Tree) -> Option<NodeId> {
    if let Some(leaf) = single_checked_leaf(tree) {
        return Some(leaf);
    }
    let root = tree.root()?;
    let leaf =
        find_checked_leaf_pre_order(tree).unwrap_or_else(|| first_leaf_pre_order(tree, root));
    set_single_leaf_checked_unverified(tree, leaf);
    Some(leaf)
}

/// Path from the topmost ancestor down to `node`, inclusive
pub fn node_simple_path(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    let mut path: Vec<NodeId> = tree.ancestors_inclusive(node).collect();
    path.reverse();
    path
}

/// Path to the checked leaf, or an empty vec when nothing is checked
pub fn checked_path(tree: &Tree) -> Vec<NodeId> {
    find_checked_leaf_pre_order(tree)
        .map(|leaf| node_simple_path(tree, leaf))
        .unwrap_or_default()
}

/// Detached identity copies of the nodes on `path`
pub fn snapshot_path(tree: &Tree, path: &[NodeId]) -> Vec<NodeSnapshot> {
    path.iter().map(|&id| tree.node(id).snapshot()).collect()
}
