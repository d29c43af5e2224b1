//! Test fixtures - reusable tree documents.

#![allow(dead_code)]

/// Two groups: a flat sort order and a two-level region picker
pub const MENU: &str = r#"[
  {"showName": "Sort", "value": "sort", "children": [
    {"showName": "Newest", "value": "new"},
    {"showName": "Cheapest", "value": "cheap"}
  ]},
  {"showName": "Region", "value": "region", "children": [
    {"showName": "North", "value": "n", "children": [
      {"showName": "Oslo", "value": "osl"},
      {"showName": "Bergen", "value": "bgo"}
    ]},
    {"showName": "South", "value": "s", "children": [
      {"showName": "Rome", "value": "rom"},
      {"showName": "Naples", "value": "nap"}
    ]}
  ]}
]"#;

/// Region picker with Naples already selected
pub const REGION_WITH_NAPLES: &str = r#"{
  "showName": "Region", "value": "region", "checked": true, "children": [
    {"showName": "North", "value": "n", "children": [
      {"showName": "Oslo", "value": "osl"},
      {"showName": "Bergen", "value": "bgo"}
    ]},
    {"showName": "South", "value": "s", "checked": true, "children": [
      {"showName": "Rome", "value": "rom"},
      {"showName": "Naples", "value": "nap", "checked": true}
    ]}
  ]
}"#;

/// Five levels deep, beyond the default depth limit
pub const TOO_DEEP: &str = r#"{"showName": "A", "value": "a", "children": [
  {"showName": "B", "value": "b", "children": [
    {"showName": "C", "value": "c", "children": [
      {"showName": "D", "value": "d", "children": [
        {"showName": "E", "value": "e"}
      ]}
    ]}
  ]}
]}"#;
