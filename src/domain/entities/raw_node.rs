//! Raw tree input as supplied by callers
//!
//! This is the deserialized, not yet normalized shape of a tree. A missing
//! `children` field is kept distinct from an empty array until the tree is
//! built; both end up as a leaf.

use serde::{Deserialize, Serialize};

/// One node of an externally supplied tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(rename = "showName", alias = "displayName")]
    pub display_name: String,

    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RawNode {
    /// A node with no `children` field at all
    pub fn leaf(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            tag: None,
            checked: false,
            children: None,
        }
    }

    /// A node with the given children
    pub fn branch(
        display_name: impl Into<String>,
        value: impl Into<String>,
        children: Vec<RawNode>,
    ) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(display_name, value)
        }
    }

    /// Mark this node as checked in the input
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn with_tag(mut self, tag: serde_json::Value) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Whether this node has at least one child
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_node_parses_show_name_and_missing_children() {
        let raw: RawNode = serde_json::from_str(r#"{"showName": "City", "value": "c"}"#).unwrap();
        assert_eq!(raw.display_name, "City");
        assert!(raw.children.is_none());
        assert!(!raw.checked);
    }

    #[test]
    fn raw_node_accepts_display_name_alias() {
        let raw: RawNode =
            serde_json::from_str(r#"{"displayName": "City", "value": "c", "children": []}"#)
                .unwrap();
        assert_eq!(raw.display_name, "City");
        assert_eq!(raw.children, Some(Vec::new()));
        assert!(!raw.has_children());
    }

    #[test]
    fn raw_node_requires_identity_fields() {
        assert!(serde_json::from_str::<RawNode>(r#"{"showName": "City"}"#).is_err());
        assert!(serde_json::from_str::<RawNode>(r#"{"value": "c"}"#).is_err());
    }

    #[test]
    fn raw_node_keeps_tag_and_checked() {
        let raw: RawNode = serde_json::from_str(
            r#"{"showName": "City", "value": "c", "checked": true, "tag": {"zip": 1000}}"#,
        )
        .unwrap();
        assert!(raw.checked);
        assert_eq!(raw.tag, Some(serde_json::json!({"zip": 1000})));
    }
}
