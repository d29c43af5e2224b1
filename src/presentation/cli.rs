//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::CascaderError;

/// Cascader - cascading single-selection over groups of trees
#[derive(Parser, Debug)]
#[command(name = "cascader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events and JSON results
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./cascader.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every group: shape, label, checked path and levels
    Inspect {
        /// Tree document (a JSON tree or an array of trees)
        file: PathBuf,
    },

    /// Apply picks to one group in a single session
    Pick {
        /// Tree document (a JSON tree or an array of trees)
        file: PathBuf,

        /// Group index
        #[arg(short, long, default_value_t = 0)]
        group: usize,

        /// Picks to apply in order, as LEVEL:POSITION
        #[arg(value_name = "LEVEL:POS", required = true)]
        picks: Vec<PickSpec>,
    },

    /// Print the aggregated selection of every group
    Collect {
        /// Tree document (a JSON tree or an array of trees)
        file: PathBuf,

        /// Report this group index as the invoker
        #[arg(long)]
        invoker: Option<usize>,
    },
}

/// A pick at `level`, `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickSpec {
    pub level: usize,
    pub position: usize,
}

impl FromStr for PickSpec {
    type Err = CascaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CascaderError::InvalidPick {
            spec: s.to_string(),
        };
        let (level, position) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            level: level.trim().parse().map_err(|_| invalid())?,
            position: position.trim().parse().map_err(|_| invalid())?,
        })
    }
}
