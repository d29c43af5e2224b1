//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `levels` - Side-by-side text columns for cascade levels
//! - `output` - Output rendering abstractions

pub mod cli;
pub mod levels;
pub mod output;

pub use cli::{Cli, Commands, PickSpec};
pub use output::{create_renderer, GroupSummary, OutputFormat, OutputRenderer};
