//! Inspect command handler
//!
//! Prints each group's shape, label, checked path and initial levels.

use std::path::Path;

use anyhow::Result;

use cascader::presentation::GroupSummary;

use super::CommandContext;

pub fn cmd_inspect(file: &Path, ctx: &CommandContext) -> Result<()> {
    let mut bar = ctx.load_menu_bar(file)?;
    let renderer = ctx.renderer();

    for index in 0..bar.len() {
        let summary = match bar.group(index) {
            Some(group) => GroupSummary::new(index, group),
            None => continue,
        };
        let controller = bar.open(index)?;
        println!(
            "{}",
            renderer.render_group(&summary, controller.tree(), controller.levels())
        );
    }
    Ok(())
}
