//! Output Rendering
//!
//! Provides a unified interface for rendering output to different formats.

use serde::Serialize;

use crate::domain::entities::{NodeSnapshot, Tree};
use crate::domain::services::{
    checked_path, snapshot_path, tree_degree, tree_depth, Group, LevelList, PickOutcome,
    Selection,
};

use super::levels::{render_levels, render_path, Markers};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Shape and selection of one group, detached from the menu bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub index: usize,
    pub name: String,
    pub label: String,
    pub depth: usize,
    pub degree: usize,
    pub checked: Vec<NodeSnapshot>,
}

impl GroupSummary {
    pub fn new(index: usize, group: &Group) -> Self {
        let tree = group.tree();
        Self {
            index,
            name: group.name().to_string(),
            label: group.label().to_string(),
            depth: tree_depth(tree),
            degree: tree_degree(tree),
            checked: snapshot_path(tree, &checked_path(tree)),
        }
    }
}

/// Trait for rendering menu bar state
pub trait OutputRenderer {
    /// Render a group summary followed by its level lists
    fn render_group(&self, summary: &GroupSummary, tree: &Tree, levels: &[LevelList]) -> String;

    /// Render the result of one pick and the levels after it
    fn render_pick(
        &self,
        pick: (usize, usize),
        outcome: &PickOutcome,
        tree: &Tree,
        levels: &[LevelList],
    ) -> String;

    /// Render an aggregated selection
    fn render_selection(&self, selection: &Selection) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn path_text(&self, path: &[NodeSnapshot]) -> String {
        if path.is_empty() {
            return "(no selection)".to_string();
        }
        render_path(path.iter().map(|n| n.display_name.as_str()), self.unicode)
    }
}

impl OutputRenderer for TextRenderer {
    fn render_group(&self, summary: &GroupSummary, tree: &Tree, levels: &[LevelList]) -> String {
        let mut out = format!(
            "[{}] {}  (label: {}, depth {}, degree {})\n    checked: {}",
            summary.index,
            summary.name,
            summary.label,
            summary.depth,
            summary.degree,
            self.path_text(&summary.checked)
        );
        let rendered = render_levels(tree, levels, self.unicode);
        if !rendered.is_empty() {
            out.push('\n');
            out.push_str(&rendered);
        }
        out
    }

    fn render_pick(
        &self,
        (level, position): (usize, usize),
        outcome: &PickOutcome,
        tree: &Tree,
        levels: &[LevelList],
    ) -> String {
        let markers = Markers::for_terminal(self.unicode);
        let headline = match outcome {
            PickOutcome::Finalized { leaf } => format!(
                "pick {}:{} {} selected {}",
                level,
                position,
                markers.checked,
                tree.node(*leaf).display_name()
            ),
            PickOutcome::Browsed { branch, .. } => format!(
                "pick {}:{} {} browsing {}",
                level,
                position,
                markers.cursor,
                tree.node(*branch).display_name()
            ),
            PickOutcome::Ignored => format!("pick {}:{} ignored", level, position),
        };
        format!("{}\n{}", headline, render_levels(tree, levels, self.unicode))
    }

    fn render_selection(&self, selection: &Selection) -> String {
        let invoked = match selection.invoked_index {
            Some(index) => index.to_string(),
            None => "none".to_string(),
        };
        let mut lines = vec![format!("Selection (invoked group: {})", invoked)];
        for (index, path) in selection.groups.iter().enumerate() {
            lines.push(format!("  [{}] {}", index, self.path_text(path)));
        }
        lines.join("\n")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelEntry<'a> {
    display_name: &'a str,
    value: &'a str,
    checked: bool,
    highlighted: bool,
    children: usize,
}

fn levels_json<'a>(tree: &'a Tree, levels: &[LevelList]) -> Vec<Vec<LevelEntry<'a>>> {
    levels
        .iter()
        .map(|level| {
            level
                .nodes()
                .iter()
                .enumerate()
                .map(|(position, &id)| {
                    let node = tree.node(id);
                    LevelEntry {
                        display_name: node.display_name(),
                        value: node.value(),
                        checked: node.is_checked(),
                        highlighted: level.highlighted() == Some(position),
                        children: tree.children(id).len(),
                    }
                })
                .collect()
        })
        .collect()
}

/// JSON renderer, one document per call
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_group(&self, summary: &GroupSummary, tree: &Tree, levels: &[LevelList]) -> String {
        let json = serde_json::json!({
            "group": summary,
            "levels": levels_json(tree, levels),
        });
        json.to_string()
    }

    fn render_pick(
        &self,
        (level, position): (usize, usize),
        outcome: &PickOutcome,
        tree: &Tree,
        levels: &[LevelList],
    ) -> String {
        let (kind, node) = match outcome {
            PickOutcome::Finalized { leaf } => ("finalized", Some(tree.node(*leaf).snapshot())),
            PickOutcome::Browsed { branch, .. } => ("browsed", Some(tree.node(*branch).snapshot())),
            PickOutcome::Ignored => ("ignored", None),
        };
        let json = serde_json::json!({
            "pick": { "level": level, "position": position },
            "outcome": kind,
            "node": node,
            "levels": levels_json(tree, levels),
        });
        json.to_string()
    }

    fn render_selection(&self, selection: &Selection) -> String {
        let json = serde_json::json!({
            "groups": selection.groups,
            "invokedIndex": selection.invoked_index_or_sentinel(),
            "simple": selection.to_simple_map(),
        });
        json.to_string()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
