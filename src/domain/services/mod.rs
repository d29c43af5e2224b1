//! Domain Services
//!
//! Pure logic over selection trees. No I/O; every operation is a finite
//! computation over an in-memory tree.

pub mod aggregator;
pub mod cascade;
pub mod selection;
pub mod traversal;

pub use aggregator::{collect, Group, GroupId, Selection};
pub use cascade::{CascadeController, LevelList, LevelRefresh, PickOutcome};
pub use selection::{
    check_leaf, check_matching_leaf, checked_leaf_or_default, checked_path,
    find_checked_leaf_pre_order, find_node, node_simple_path, set_all_unchecked,
    set_single_leaf_checked, set_single_leaf_checked_unverified, single_checked_leaf,
    snapshot_path,
};
pub use traversal::{
    find_pre_order, first_leaf_pre_order, pre_order_ids, subtree_depth, tree_degree, tree_depth,
    walk_pre_order,
};
