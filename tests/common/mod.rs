//! Common test utilities for Cascader scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus a helper to run the CLI
//! - Fixtures: Reusable tree documents

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
