//! Domain Entities
//!
//! - `Node` - one element of a selection tree, identified by name + value
//! - `Tree` - arena owning the nodes of one rooted tree
//! - `RawNode` - externally supplied tree before normalization

mod node;
mod raw_node;
mod tree;

pub use node::{Node, NodeId, NodeSnapshot};
pub use raw_node::RawNode;
pub use tree::Tree;
