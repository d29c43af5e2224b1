//! Cascade controller - per-level pick lists for one tree
//!
//! The root is never shown. Level 0 lists the root's children, level 1 the
//! children of the node active at level 0, and so on down to
//! `tree_depth - 1` levels.
//!
//! Picking a branch only moves the browsing position: deeper levels are
//! recomputed, preferring a child that is already checked so an existing
//! deep selection stays visible. The checked path itself changes only when
//! a leaf is picked.

use std::sync::Arc;

use crate::domain::entities::{Node, NodeId, Tree};
use crate::domain::ports::{SelectionEvent, SelectionEventSink};

use super::selection::{check_leaf, checked_leaf_or_default, node_simple_path, snapshot_path};
use super::traversal::tree_depth;

/// Nodes shown at one level, with the entry currently highlighted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelList {
    nodes: Vec<NodeId>,
    highlighted: Option<usize>,
}

impl LevelList {
    fn new(nodes: Vec<NodeId>, highlighted: Option<usize>) -> Self {
        Self { nodes, highlighted }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.nodes.get(position).copied()
    }

    /// Position of the highlighted entry, if any
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// How one deeper level was recomputed after a branch pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRefresh {
    pub level: usize,
    /// Position of an already checked child that was kept, if one existed
    pub restored: Option<usize>,
}

/// Result of [`CascadeController::on_pick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A leaf was picked and is now the single checked leaf
    Finalized { leaf: NodeId },
    /// A branch was picked; deeper levels were recomputed
    Browsed {
        branch: NodeId,
        refreshed: Vec<LevelRefresh>,
    },
    /// Nothing is shown at that level/position; the tree is unchanged
    Ignored,
}

impl PickOutcome {
    pub fn is_finalized(&self) -> bool {
        matches!(self, PickOutcome::Finalized { .. })
    }

    /// The finalized leaf, if this pick completed a selection
    pub fn finalized_leaf(&self) -> Option<NodeId> {
        match self {
            PickOutcome::Finalized { leaf } => Some(*leaf),
            _ => None,
        }
    }
}

/// Keeps per-level pick lists consistent with one tree.
///
/// Holds the tree exclusively for the duration of a session.
pub struct CascadeController<'t> {
    tree: &'t mut Tree,
    levels: Vec<LevelList>,
    events: Option<Arc<dyn SelectionEventSink>>,
}

impl<'t> CascadeController<'t> {
    /// Create a controller with one (empty) level per depth below the root.
    ///
    /// Call [`initialize`](Self::initialize) before picking.
    pub fn new(tree: &'t mut Tree) -> Self {
        let level_count = tree_depth(tree).saturating_sub(1);
        Self {
            tree,
            levels: vec![LevelList::default(); level_count],
            events: None,
        }
    }

    /// Report session events to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn SelectionEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[LevelList] {
        &self.levels
    }

    pub fn level(&self, level: usize) -> Option<&LevelList> {
        self.levels.get(level)
    }

    pub fn tree(&self) -> &Tree {
        &*self.tree
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.tree.node(id)
    }

    /// Derive every level from the checked path, defaulting it first.
    ///
    /// Level `i` shows the children of the `i`-th node on the path and
    /// highlights the entry that lies on the path.
    pub fn initialize(&mut self) -> &[LevelList] {
        let Some(leaf) = checked_leaf_or_default(self.tree) else {
            return &self.levels;
        };
        let path = node_simple_path(self.tree, leaf);

        for (index, level) in self.levels.iter_mut().enumerate() {
            *level = match path.get(index) {
                Some(&node) if index + 1 < path.len() => {
                    let nodes = self.tree.children(node).to_vec();
                    let highlighted = nodes.iter().position(|&c| c == path[index + 1]);
                    LevelList::new(nodes, highlighted)
                }
                _ => LevelList::default(),
            };
        }

        log::debug!(
            "cascade initialized: {} levels, checked leaf {}",
            self.levels.len(),
            self.tree.node(leaf).display_name()
        );
        if let Some(root) = self.tree.root() {
            let event = SelectionEvent::Initialized {
                root: self.tree.node(root).snapshot(),
                level_count: self.levels.len(),
                checked: snapshot_path(self.tree, &path),
            };
            self.emit(event);
        }
        &self.levels
    }

    /// Apply a pick of the entry at `position` in level `level`.
    pub fn on_pick(&mut self, level: usize, position: usize) -> PickOutcome {
        let Some(clicked) = self.levels.get(level).and_then(|l| l.get(position)) else {
            log::debug!("pick {}:{} is outside the visible lists", level, position);
            self.emit(SelectionEvent::PickIgnored { level, position });
            return PickOutcome::Ignored;
        };

        if self.tree.is_leaf(clicked) {
            self.finalize(level, position, clicked)
        } else {
            self.browse(level, position, clicked)
        }
    }

    fn finalize(&mut self, level: usize, position: usize, clicked: NodeId) -> PickOutcome {
        if !check_leaf(self.tree, clicked) {
            self.emit(SelectionEvent::PickIgnored { level, position });
            return PickOutcome::Ignored;
        }
        let leaf = clicked;
        self.levels[level].highlighted = Some(position);

        log::debug!(
            "pick {}:{} finalized leaf {}",
            level,
            position,
            self.tree.node(leaf).display_name()
        );
        let path = node_simple_path(self.tree, leaf);
        let event = SelectionEvent::Finalized {
            level,
            position,
            path: snapshot_path(self.tree, &path),
        };
        self.emit(event);
        PickOutcome::Finalized { leaf }
    }

    fn browse(&mut self, level: usize, position: usize, clicked: NodeId) -> PickOutcome {
        self.levels[level].highlighted = Some(position);

        let mut refreshed = Vec::with_capacity(self.levels.len().saturating_sub(level + 1));
        let mut current = Some(clicked);
        for index in level + 1..self.levels.len() {
            let (list, next) = match current {
                Some(node) if self.tree.is_branch(node) => {
                    let nodes = self.tree.children(node).to_vec();
                    let restored = nodes
                        .iter()
                        .position(|&c| self.tree.node(c).is_checked());
                    let next = nodes[restored.unwrap_or(0)];
                    (LevelList::new(nodes, restored), Some(next))
                }
                _ => (LevelList::default(), None),
            };
            refreshed.push(LevelRefresh {
                level: index,
                restored: list.highlighted,
            });
            self.levels[index] = list;
            current = next;
        }

        log::debug!(
            "pick {}:{} browsed into {}, refreshed {} levels",
            level,
            position,
            self.tree.node(clicked).display_name(),
            refreshed.len()
        );
        let event = SelectionEvent::Browsed {
            level,
            position,
            node: self.tree.node(clicked).snapshot(),
            restored: refreshed.iter().map(|r| r.restored).collect(),
        };
        self.emit(event);
        PickOutcome::Browsed {
            branch: clicked,
            refreshed,
        }
    }

    fn emit(&self, event: SelectionEvent) {
        if let Some(sink) = &self.events {
            sink.on_event(event);
        }
    }
}
