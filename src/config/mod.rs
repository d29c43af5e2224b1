//! Configuration module for cascader
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CASCADER_*)
//! 3. Project config (./cascader.toml)
//! 4. User config (~/.config/cascader/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CascadeConfig, Config, OutputConfig, Verbosity};
