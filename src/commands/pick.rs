//! Pick command handler
//!
//! Applies picks to one group. A finalized leaf ends the session and
//! commits the group; any picks left over start a new session.

use std::path::Path;

use anyhow::Result;

use cascader::presentation::PickSpec;

use super::CommandContext;

pub fn cmd_pick(file: &Path, group: usize, picks: &[PickSpec], ctx: &CommandContext) -> Result<()> {
    let mut bar = ctx.load_menu_bar(file)?;
    let renderer = ctx.renderer();

    let mut pending = picks.iter().peekable();
    while pending.peek().is_some() {
        let finalized = {
            let mut controller = bar.open(group)?;
            let mut finalized = false;
            for spec in pending.by_ref() {
                let outcome = controller.on_pick(spec.level, spec.position);
                println!(
                    "{}",
                    renderer.render_pick(
                        (spec.level, spec.position),
                        &outcome,
                        controller.tree(),
                        controller.levels()
                    )
                );
                if outcome.is_finalized() {
                    finalized = true;
                    break;
                }
            }
            finalized
        };

        if finalized {
            let selection = bar.commit(group)?;
            println!("{}", renderer.render_selection(&selection));
        }
    }
    Ok(())
}
