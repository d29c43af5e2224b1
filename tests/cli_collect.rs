mod common;

use common::*;

#[test]
fn test_collect_without_invoker() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["collect", "menu.json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    insta::assert_snapshot!(result.stdout.lines().next().unwrap(), @"Selection (invoked group: none)");
    assert!(result.stdout.contains("[0] Sort › Newest"));
}

#[test]
fn test_collect_json_with_invoker() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["collect", "menu.json", "--invoker", "1", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let lines = result.json_lines();
    let collected = lines.iter().find(|l| l["event"] == "collected").unwrap();
    assert_eq!(collected["group_count"], 2);
    assert_eq!(collected["invoked_index"], 1);

    let selection = lines.last().unwrap();
    assert_eq!(selection["invokedIndex"], 1);
    assert_eq!(selection["groups"][1][2]["value"], "osl");
}

#[test]
fn test_collect_unknown_invoker_fails() {
    let env = TestEnv::new();
    env.write("menu.json", MENU);

    let result = env.run(&["collect", "menu.json", "--invoker", "5"]);

    assert!(!result.success);
}
