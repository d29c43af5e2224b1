//! Cascader - cascading single-selection over groups of trees
//!
//! A group is a tree whose root names the group and whose leaves are the
//! selectable options. Exactly one root-to-leaf path per tree is checked.
//! The tree is browsed level by level: each level lists the children of
//! the node active one level up. Picking a leaf makes it the checked leaf;
//! the checked paths of every group are then aggregated into a
//! [`Selection`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DepthLimits, MenuBar};
pub use config::{Config, Verbosity};
pub use domain::entities::{Node, NodeId, NodeSnapshot, RawNode, Tree};
pub use domain::ports::{NoopEventSink, SelectionEvent, SelectionEventSink};
pub use domain::services::{
    collect, CascadeController, Group, GroupId, LevelList, LevelRefresh, PickOutcome, Selection,
};
pub use error::{CascaderError, CascaderResult};
pub use infrastructure::{load_trees, parse_trees, JsonEventSink};
