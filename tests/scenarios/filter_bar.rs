//! Scenario: A filter bar with several groups
//!
//! Journey: An app shows sort and region filters side by side. The user
//! changes the sort order; the app receives every group's selection plus
//! the index of the group that changed.
//!
//! Success Criteria:
//! - Invalid groups are rejected without disturbing the others
//! - Each commit reports the invoking group's index
//! - The simple map pairs group names with chosen leaves

use cascader::{parse_trees, CascaderError, MenuBar};

use crate::common::*;

/// SCENARIO: Change the sort order and read the aggregated selection
#[test]
fn scenario_commit_reports_invoking_group() {
    let mut bar = MenuBar::default();
    let mut trees = parse_trees(MENU).unwrap();
    trees.extend(parse_trees(TOO_DEEP).unwrap());

    let results = bar.set_groups(trees);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(
        results[2],
        Err(CascaderError::UnsupportedDepth { depth: 5, .. })
    ));
    assert_eq!(bar.len(), 2);

    // Step 1: Pick "Cheapest" in the sort group.
    let (outcome, selection) = bar.pick(0, 0, 1).unwrap();
    assert!(outcome.is_finalized());
    let selection = selection.expect("leaf pick commits");

    assert_eq!(selection.invoked_index, Some(0));
    assert_eq!(selection.groups.len(), 2);
    let map = selection.to_simple_map();
    assert_eq!(map.get("Sort").map(String::as_str), Some("Cheapest"));
    assert_eq!(map.get("Region").map(String::as_str), Some("Oslo"));

    // Step 2: A read-only refresh has no invoker.
    assert_eq!(bar.collect(None).invoked_index_or_sentinel(), -1);
    assert_eq!(bar.labels(), vec!["Cheapest", "Oslo"]);
}
