//! Property tests for tree normalization and the checked path.

use proptest::prelude::*;

use cascader::domain::services::{
    checked_leaf_or_default, checked_path, node_simple_path, pre_order_ids, single_checked_leaf,
    tree_depth,
};
use cascader::Tree;

use crate::strategies::raw_tree;

fn parents(tree: &Tree) -> Vec<Option<cascader::NodeId>> {
    pre_order_ids(tree)
        .into_iter()
        .map(|id| tree.parent(id))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization is idempotent and links every child to its lister.
    #[test]
    fn property_format_tree_is_idempotent(raw in raw_tree()) {
        let mut tree = Tree::from_raw(raw);
        let before = parents(&tree);

        tree.format_tree();
        prop_assert_eq!(parents(&tree), before);

        for id in pre_order_ids(&tree) {
            for &child in tree.children(id) {
                prop_assert_eq!(tree.parent(child), Some(id));
            }
        }
    }

    /// PROPERTY: Defaulting always leaves exactly one checked root-to-leaf path.
    #[test]
    fn property_default_establishes_single_path(raw in raw_tree()) {
        let mut tree = Tree::from_raw(raw);

        let leaf = checked_leaf_or_default(&mut tree).unwrap();

        prop_assert_eq!(single_checked_leaf(&tree), Some(leaf));
        prop_assert!(tree.is_leaf(leaf));
        let path = node_simple_path(&tree, leaf);
        prop_assert_eq!(path.first().copied(), tree.root());
        prop_assert!(path.len() <= tree_depth(&tree));
    }

    /// PROPERTY: Defaulting a tree that already holds a single path keeps it.
    #[test]
    fn property_default_is_stable(raw in raw_tree()) {
        let mut tree = Tree::from_raw(raw);
        let first = checked_leaf_or_default(&mut tree);
        let path = checked_path(&tree);

        let second = checked_leaf_or_default(&mut tree);

        prop_assert_eq!(first, second);
        prop_assert_eq!(checked_path(&tree), path);
    }
}
