mod common;

use common::*;

#[test]
fn test_pick_leaf_prints_selection() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["pick", "menu.json", "--group", "1", "0:1", "1:1"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("pick 0:1 ▸ browsing South"));
    assert!(result.stdout.contains("pick 1:1 ● selected Naples"));
    assert!(result.stdout.contains("Selection (invoked group: 1)"));
    assert!(result.stdout.contains("[1] Region › South › Naples"));
}

#[test]
fn test_pick_out_of_range_is_ignored() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["pick", "menu.json", "3:0"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("pick 3:0 ignored"));
    assert!(!result.stdout.contains("Selection"));
}

#[test]
fn test_pick_json_outcomes() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["pick", "menu.json", "--group", "0", "0:1", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let lines = result.json_lines();
    let finalized = lines
        .iter()
        .find(|l| l["event"] == "finalized")
        .expect("finalized event");
    assert_eq!(finalized["path"][1]["displayName"], "Cheapest");

    let pick = lines.iter().find(|l| l.get("outcome").is_some()).unwrap();
    assert_eq!(pick["outcome"], "finalized");

    let selection = lines.last().unwrap();
    assert_eq!(selection["invokedIndex"], 0);
    assert_eq!(selection["simple"]["Sort"], "Cheapest");
}

#[test]
fn test_pick_unknown_group_fails() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["pick", "menu.json", "--group", "7", "0:0"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("no group at index 7"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_pick_rejects_malformed_spec() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["pick", "menu.json", "one:two"]);

    assert!(!result.success);
    assert!(result.stderr.contains("LEVEL:POSITION"), "stderr: {}", result.stderr);
}
