//! Command handlers for the `cascader` binary

pub mod collect;
pub mod inspect;
pub mod pick;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use cascader::presentation::{create_renderer, OutputFormat, OutputRenderer};
use cascader::{load_trees, Config, JsonEventSink, MenuBar};

/// Settings shared by every command
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    pub fn renderer(&self) -> Box<dyn OutputRenderer> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        create_renderer(format, self.config.output.unicode)
    }

    /// Load every tree in `file` into a menu bar. Any rejected tree is an error.
    pub fn load_menu_bar(&self, file: &Path) -> Result<MenuBar> {
        let trees =
            load_trees(file).with_context(|| format!("failed to load {}", file.display()))?;

        let mut bar = MenuBar::new(self.config.cascade.limits());
        if self.json {
            bar = bar.with_event_sink(Arc::new(JsonEventSink::stdout()));
        }
        for (index, tree) in trees.into_iter().enumerate() {
            bar.append_group(tree)
                .with_context(|| format!("group {} in {}", index, file.display()))?;
        }
        Ok(bar)
    }
}
