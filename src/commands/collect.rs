//! Collect command handler

use std::path::Path;

use anyhow::Result;

use cascader::CascaderError;

use super::CommandContext;

pub fn cmd_collect(file: &Path, invoker: Option<usize>, ctx: &CommandContext) -> Result<()> {
    let bar = ctx.load_menu_bar(file)?;

    let invoker = match invoker {
        Some(index) => Some(
            bar.group(index)
                .map(|group| group.id())
                .ok_or(CascaderError::GroupNotFound {
                    index,
                    count: bar.len(),
                })?,
        ),
        None => None,
    };

    let selection = bar.collect(invoker);
    println!("{}", ctx.renderer().render_selection(&selection));
    Ok(())
}
