//! Cascader CLI - cascading single-selection over groups of trees
//!
//! Usage: cascader <COMMAND>
//!
//! Commands:
//!   inspect  Show every group's shape, label and levels
//!   pick     Apply LEVEL:POS picks to one group
//!   collect  Print the aggregated selection

mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use cascader::presentation::{Cli, Commands};
use cascader::{Config, Verbosity};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The logger accepts everything; the max level set below does the filtering.
    let _ = WriteLogger::init(LevelFilter::Trace, LogConfig::default(), std::io::stderr());
    log::set_max_level(Verbosity::Normal.raised_by(cli.verbose).level_filter());

    let config = load_config(cli.config.as_deref())?;
    log::set_max_level(config.output.verbosity.raised_by(cli.verbose).level_filter());
    log::debug!(
        "depth limits {}..={}",
        config.cascade.min_depth,
        config.cascade.max_depth
    );

    let ctx = CommandContext {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Inspect { file } => commands::inspect::cmd_inspect(&file, &ctx),
        Commands::Pick { file, group, picks } => {
            commands::pick::cmd_pick(&file, group, &picks, &ctx)
        }
        Commands::Collect { file, invoker } => {
            commands::collect::cmd_collect(&file, invoker, &ctx)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let cwd = std::env::current_dir()?;
        return Ok(Config::load_or_default(Some(&cwd)));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match warning.suggestion {
            Some(suggestion) => log::warn!(
                "unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => log::warn!("unknown config key '{}' at {}", warning.key, location),
        }
    }
    Ok(config.with_env_overrides())
}
