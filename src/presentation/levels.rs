//! Text rendering of cascade levels.
//!
//! Levels are laid out side by side, one column per level, each column
//! padded to its widest entry by display width.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{NodeId, Tree};
use crate::domain::services::LevelList;

/// Markers used in level rows
pub(crate) struct Markers {
    pub(crate) cursor: &'static str,
    pub(crate) checked: &'static str,
    pub(crate) unchecked: &'static str,
    pub(crate) separator: &'static str,
    pub(crate) path: &'static str,
}

impl Markers {
    pub(crate) fn unicode() -> Self {
        Self {
            cursor: "▸",
            checked: "●",
            unchecked: "○",
            separator: " │ ",
            path: " › ",
        }
    }

    pub(crate) fn ascii() -> Self {
        Self {
            cursor: ">",
            checked: "(*)",
            unchecked: "( )",
            separator: " | ",
            path: " > ",
        }
    }

    pub(crate) fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Render one entry of a level
///
/// Highlighted entries get a cursor. Branches show their child count.
pub fn render_entry(
    tree: &Tree,
    id: NodeId,
    position: usize,
    is_highlighted: bool,
    supports_unicode: bool,
) -> String {
    let markers = Markers::for_terminal(supports_unicode);
    let node = tree.node(id);

    let cursor = if is_highlighted { markers.cursor } else { " " };
    let mark = if node.is_checked() {
        markers.checked
    } else {
        markers.unchecked
    };
    let count_suffix = if tree.is_branch(id) {
        format!(" ({})", tree.children(id).len())
    } else {
        String::new()
    };

    format!(
        "{} {} {}. {}{}",
        cursor,
        mark,
        position,
        node.display_name(),
        count_suffix
    )
}

/// Render every level as a column, with a `level N` header per column
pub fn render_levels(tree: &Tree, levels: &[LevelList], supports_unicode: bool) -> String {
    if levels.is_empty() {
        return String::new();
    }
    let markers = Markers::for_terminal(supports_unicode);

    let columns: Vec<Vec<String>> = levels
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let mut cells = vec![format!("level {}", index)];
            cells.extend(level.nodes().iter().enumerate().map(|(position, &id)| {
                let is_highlighted = level.highlighted() == Some(position);
                render_entry(tree, id, position, is_highlighted, supports_unicode)
            }));
            cells
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|cells| cells.iter().map(|c| c.width()).max().unwrap_or(0))
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = columns
            .iter()
            .zip(&widths)
            .map(|(cells, &width)| pad(cells.get(row).map_or("", String::as_str), width))
            .collect::<Vec<_>>()
            .join(markers.separator);
        out.push(line.trim_end().to_string());
    }
    out.join("\n")
}

/// Render a root-first path of display names
pub fn render_path<'a>(names: impl IntoIterator<Item = &'a str>, supports_unicode: bool) -> String {
    let markers = Markers::for_terminal(supports_unicode);
    names.into_iter().collect::<Vec<_>>().join(markers.path)
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}
