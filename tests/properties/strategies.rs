//! Shared proptest strategies.

use proptest::prelude::*;

use cascader::RawNode;

fn name() -> impl Strategy<Value = String> {
    "[a-f]{1,2}"
}

fn mark(node: RawNode, checked: bool) -> RawNode {
    if checked {
        node.checked()
    } else {
        node
    }
}

/// Random raw trees with arbitrary (often inconsistent) checked flags.
///
/// Names come from a small alphabet so identity collisions between
/// unrelated nodes are common.
pub fn raw_tree() -> impl Strategy<Value = RawNode> {
    let leaf = (name(), any::<bool>())
        .prop_map(|(name, checked)| mark(RawNode::leaf(name.clone(), name), checked));

    leaf.prop_recursive(4, 48, 4, |inner| {
        (name(), any::<bool>(), prop::collection::vec(inner, 1..5)).prop_map(
            |(name, checked, children)| {
                mark(RawNode::branch(name.clone(), name, children), checked)
            },
        )
    })
}

/// Sequences of (level, position) picks, some of them out of range.
pub fn picks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..6), 0..24)
}
