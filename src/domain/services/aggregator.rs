//! Selection aggregation across groups
//!
//! Each group is an independent tree. [`collect`] snapshots the checked path
//! of every group, in order, and reports which group triggered the change.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::domain::entities::{NodeSnapshot, Tree};

use super::selection::{checked_path, find_checked_leaf_pre_order, snapshot_path};

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a group, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupId(u64);

impl GroupId {
    fn next() -> Self {
        Self(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One independent tree plus the label shown for it
///
/// Not `Clone`: a copy would share the original's [`GroupId`].
#[derive(Debug)]
pub struct Group {
    id: GroupId,
    tree: Tree,
    label: String,
}

impl Group {
    /// Wrap `tree`, labelling it with its checked leaf or `default_label`
    pub fn new(tree: Tree, default_label: impl Into<String>) -> Self {
        let mut group = Self {
            id: GroupId::next(),
            tree,
            label: default_label.into(),
        };
        group.refresh_label();
        group
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display name of the tree's root, or an empty string
    pub fn name(&self) -> &str {
        self.tree
            .root()
            .map_or("", |root| self.tree.node(root).display_name())
    }

    /// Set the label to the checked leaf's display name, if there is one
    pub fn refresh_label(&mut self) {
        if let Some(leaf) = find_checked_leaf_pre_order(&self.tree) {
            self.label = self.tree.node(leaf).display_name().to_string();
        }
    }
}

/// Combined selection of every group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Checked path per group, root first; empty when a group has no selection
    pub groups: Vec<Vec<NodeSnapshot>>,
    /// Position of the invoking group in `groups`
    pub invoked_index: Option<usize>,
}

impl Selection {
    /// `invoked_index`, with `-1` standing for "no invoking group"
    pub fn invoked_index_or_sentinel(&self) -> isize {
        self.invoked_index.map_or(-1, |i| i as isize)
    }

    /// Group name to selected leaf name, skipping groups without a selection
    pub fn to_simple_map(&self) -> BTreeMap<String, String> {
        self.groups
            .iter()
            .filter_map(|path| match (path.first(), path.last()) {
                (Some(root), Some(leaf)) => {
                    Some((root.display_name.clone(), leaf.display_name.clone()))
                }
                _ => None,
            })
            .collect()
    }
}

/// Snapshot the checked path of each group and locate `invoker`.
///
/// Only reads the trees. `invoked_index` is `None` when `invoker` is `None`
/// or not one of `groups`.
pub fn collect(groups: &[Group], invoker: Option<GroupId>) -> Selection {
    let paths = groups
        .iter()
        .map(|group| {
            let tree = group.tree();
            snapshot_path(tree, &checked_path(tree))
        })
        .collect();

    let invoked_index =
        invoker.and_then(|invoker| groups.iter().position(|group| group.id() == invoker));

    log::debug!(
        "collected {} groups, invoked index {:?}",
        groups.len(),
        invoked_index
    );
    Selection {
        groups: paths,
        invoked_index,
    }
}
