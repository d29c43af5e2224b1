//! Scenario: Browsing a two-level region picker
//!
//! Journey: A user opens the region group, looks around another branch
//! without choosing, then reopens the picker and chooses a city.
//!
//! Success Criteria:
//! - The default selection is the first city
//! - Browsing never changes the selection
//! - A previous deep selection is restored when its branch is revisited

use cascader::{parse_trees, MenuBar, PickOutcome};

use crate::common::*;

fn names(bar: &MenuBar, group: usize) -> Vec<String> {
    let selection = bar.collect(None);
    selection.groups[group]
        .iter()
        .map(|n| n.display_name.clone())
        .collect()
}

/// SCENARIO: Browse away and back without choosing
#[test]
fn scenario_browsing_does_not_change_selection() {
    let mut bar = MenuBar::default();
    for tree in parse_trees(MENU).unwrap() {
        bar.append_group(tree).unwrap();
    }
    assert_eq!(names(&bar, 1), vec!["Region", "North", "Oslo"]);

    // Step 1: Browse into South; the levels follow, the selection does not.
    {
        let mut controller = bar.open(1).unwrap();
        let outcome = controller.on_pick(0, 1);
        assert!(matches!(outcome, PickOutcome::Browsed { .. }));

        let level1: Vec<_> = controller.levels()[1]
            .nodes()
            .iter()
            .map(|&id| controller.node(id).display_name().to_string())
            .collect();
        assert_eq!(level1, vec!["Rome", "Naples"]);
        assert_eq!(controller.levels()[1].highlighted(), None);
    }
    assert_eq!(names(&bar, 1), vec!["Region", "North", "Oslo"]);
    assert_eq!(bar.labels(), vec!["Newest", "Oslo"]);

    // Step 2: Reopen; the session starts from the checked path again.
    let controller = bar.open(1).unwrap();
    assert_eq!(controller.levels()[0].highlighted(), Some(0));
    assert_eq!(controller.levels()[1].highlighted(), Some(0));
}

/// SCENARIO: Choose a city, then revisit its branch
#[test]
fn scenario_deep_selection_is_sticky() {
    let mut bar = MenuBar::default();
    for tree in parse_trees(REGION_WITH_NAPLES).unwrap() {
        bar.append_group(tree).unwrap();
    }
    // Step 1: The existing selection survives loading.
    assert_eq!(bar.labels(), vec!["Naples"]);

    // Step 2: Browse North, then back to South: Naples is restored.
    {
        let mut controller = bar.open(0).unwrap();
        assert_eq!(controller.levels()[0].highlighted(), Some(1));

        controller.on_pick(0, 0);
        assert_eq!(controller.levels()[1].highlighted(), None);

        let outcome = controller.on_pick(0, 1);
        match outcome {
            PickOutcome::Browsed { refreshed, .. } => {
                assert_eq!(refreshed.len(), 1);
                assert_eq!(refreshed[0].restored, Some(1));
            }
            other => panic!("expected a browse, got {:?}", other),
        }

        // Step 3: Choose Rome.
        assert!(controller.on_pick(1, 0).is_finalized());
    }

    let selection = bar.commit(0).unwrap();
    assert_eq!(selection.invoked_index, Some(0));
    assert_eq!(bar.labels(), vec!["Rome"]);
    assert_eq!(names(&bar, 0), vec!["Region", "South", "Rome"]);
}
