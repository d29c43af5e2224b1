//! Menu bar use case
//!
//! Owns an ordered list of groups. Each group is one tree whose root names
//! the group and whose checked leaf becomes the group's label. Opening a
//! group starts a cascade session over its tree; committing it refreshes
//! the label and aggregates the selection of every group.

use std::sync::Arc;

use crate::domain::entities::Tree;
use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use crate::domain::services::{
    checked_leaf_or_default, collect, tree_depth, CascadeController, Group, GroupId, PickOutcome,
    Selection,
};
use crate::error::{CascaderError, CascaderResult};

/// Accepted tree depths, counted in nodes from root to deepest leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimits {
    pub min_depth: usize,
    pub max_depth: usize,
}

impl DepthLimits {
    pub fn new(min_depth: usize, max_depth: usize) -> Self {
        Self {
            min_depth,
            max_depth,
        }
    }

    pub fn allows(&self, depth: usize) -> bool {
        (self.min_depth..=self.max_depth).contains(&depth)
    }
}

impl Default for DepthLimits {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// Ordered groups of cascading selection trees
pub struct MenuBar {
    limits: DepthLimits,
    groups: Vec<Group>,
    events: Option<Arc<dyn SelectionEventSink>>,
}

impl MenuBar {
    pub fn new(limits: DepthLimits) -> Self {
        Self {
            limits,
            groups: Vec::new(),
            events: None,
        }
    }

    /// Report session and aggregation events to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn SelectionEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    pub fn limits(&self) -> DepthLimits {
        self.limits
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Current label of every group, in order
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(Group::label).collect()
    }

    /// Replace all groups. Rejected trees are skipped; the result for each
    /// input is reported in order.
    pub fn set_groups<I, T>(&mut self, trees: I) -> Vec<CascaderResult<GroupId>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Tree>,
    {
        self.groups.clear();
        trees
            .into_iter()
            .map(|tree| self.append_group(tree))
            .collect()
    }

    /// Append a group after checking its shape against the depth limits.
    ///
    /// The tree's selection is defaulted to its first leaf when it does not
    /// already hold a single checked path.
    pub fn append_group(&mut self, tree: impl Into<Tree>) -> CascaderResult<GroupId> {
        let mut tree = tree.into();
        tree.format_tree();

        let root_name = tree
            .root()
            .map(|root| tree.node(root).display_name().to_string())
            .unwrap_or_default();

        if let Err(err) = self.check_shape(&tree, &root_name) {
            log::warn!("rejected group '{}': {}", root_name, err);
            self.emit(SelectionEvent::GroupRejected {
                root: root_name,
                reason: err.to_string(),
            });
            return Err(err);
        }

        checked_leaf_or_default(&mut tree);
        let group = Group::new(tree, root_name);
        let id = group.id();
        log::debug!(
            "appended group '{}' at index {} labelled '{}'",
            group.name(),
            self.groups.len(),
            group.label()
        );
        self.groups.push(group);
        Ok(id)
    }

    fn check_shape(&self, tree: &Tree, root_name: &str) -> CascaderResult<()> {
        let has_children = tree
            .root()
            .is_some_and(|root| !tree.children(root).is_empty());
        if !has_children {
            return Err(CascaderError::EmptyTree {
                root: root_name.to_string(),
            });
        }

        let depth = tree_depth(tree);
        if !self.limits.allows(depth) {
            return Err(CascaderError::UnsupportedDepth {
                root: root_name.to_string(),
                depth,
                min: self.limits.min_depth,
                max: self.limits.max_depth,
            });
        }
        Ok(())
    }

    /// Start an initialized cascade session over group `index`
    pub fn open(&mut self, index: usize) -> CascaderResult<CascadeController<'_>> {
        let count = self.groups.len();
        let events = self.events.clone();
        let group = self
            .groups
            .get_mut(index)
            .ok_or(CascaderError::GroupNotFound { index, count })?;

        let mut controller = CascadeController::new(group.tree_mut());
        if let Some(sink) = events {
            controller = controller.with_event_sink(sink);
        }
        controller.initialize();
        Ok(controller)
    }

    /// Refresh the label of group `index` and aggregate with it as invoker
    pub fn commit(&mut self, index: usize) -> CascaderResult<Selection> {
        let count = self.groups.len();
        let group = self
            .groups
            .get_mut(index)
            .ok_or(CascaderError::GroupNotFound { index, count })?;
        group.refresh_label();
        let invoker = group.id();

        Ok(self.collect(Some(invoker)))
    }

    /// Apply a single pick in a fresh session; commit when a leaf is finalized
    pub fn pick(
        &mut self,
        index: usize,
        level: usize,
        position: usize,
    ) -> CascaderResult<(PickOutcome, Option<Selection>)> {
        let outcome = {
            let mut controller = self.open(index)?;
            controller.on_pick(level, position)
        };

        let selection = if outcome.is_finalized() {
            Some(self.commit(index)?)
        } else {
            None
        };
        Ok((outcome, selection))
    }

    /// Aggregate the selection of every group
    pub fn collect(&self, invoker: Option<GroupId>) -> Selection {
        let selection = collect(&self.groups, invoker);
        self.emit(SelectionEvent::Collected {
            group_count: self.groups.len(),
            invoked_index: selection.invoked_index,
        });
        selection
    }

    fn emit(&self, event: SelectionEvent) {
        if let Some(sink) = &self.events {
            sink.on_event(event);
        }
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new(DepthLimits::default())
    }
}
