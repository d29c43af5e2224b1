//! Property tests for cascade sessions.

use proptest::prelude::*;

use cascader::domain::services::single_checked_leaf;
use cascader::{CascadeController, PickOutcome, Tree};

use crate::strategies::{picks, raw_tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any pick sequence keeps exactly one checked path, ending at
    /// the clicked leaf after a finalizing pick.
    #[test]
    fn property_picks_preserve_single_checked_path(raw in raw_tree(), picks in picks()) {
        let mut tree = Tree::from_raw(raw);
        let mut controller = CascadeController::new(&mut tree);
        controller.initialize();

        for (level, position) in picks {
            let clicked = controller.level(level).and_then(|l| l.get(position));
            let outcome = controller.on_pick(level, position);
            prop_assert!(single_checked_leaf(controller.tree()).is_some());

            if let PickOutcome::Finalized { leaf } = outcome {
                prop_assert_eq!(Some(leaf), clicked);
                prop_assert!(controller.tree().is_leaf(leaf));
                prop_assert_eq!(single_checked_leaf(controller.tree()), Some(leaf));
            }
        }
    }

    /// PROPERTY: Every listed entry below level 0 is a child of an entry one level up.
    #[test]
    fn property_levels_descend_from_previous_level(raw in raw_tree(), picks in picks()) {
        let mut tree = Tree::from_raw(raw);
        let mut controller = CascadeController::new(&mut tree);
        controller.initialize();

        for (level, position) in picks {
            controller.on_pick(level, position);

            let tree = controller.tree();
            let levels = controller.levels();
            if let (Some(first), Some(root)) = (levels.first(), tree.root()) {
                if !first.is_empty() {
                    prop_assert_eq!(first.nodes(), tree.children(root));
                }
            }
            for pair in levels.windows(2) {
                for &id in pair[1].nodes() {
                    let parent = tree.parent(id).unwrap();
                    prop_assert!(pair[0].nodes().contains(&parent));
                }
            }
        }
    }

    /// PROPERTY: Picks outside the visible lists never change the tree.
    #[test]
    fn property_out_of_range_picks_are_ignored(raw in raw_tree(), position in 6usize..20) {
        let mut tree = Tree::from_raw(raw);
        let mut controller = CascadeController::new(&mut tree);
        controller.initialize();
        let levels_before = controller.levels().to_vec();

        let outcome = controller.on_pick(0, position);

        prop_assert_eq!(outcome, PickOutcome::Ignored);
        prop_assert_eq!(controller.levels(), levels_before.as_slice());
    }
}
