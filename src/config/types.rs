//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::DepthLimits;
use crate::error::CascaderResult;

use super::loader::{self, ConfigWarning};

/// Cascade shape policy
///
/// Depth counts nodes on the longest root-to-leaf path, so a depth of 2 is
/// a root with leaf children (one visible level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeConfig {
    #[serde(default = "default_min_depth")]
    pub min_depth: usize,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            min_depth: default_min_depth(),
            max_depth: default_max_depth(),
        }
    }
}

impl CascadeConfig {
    pub fn limits(&self) -> DepthLimits {
        DepthLimits::new(self.min_depth, self.max_depth)
    }

    /// Whether `min_depth` exceeds `max_depth`, which rejects every tree
    pub fn is_inverted(&self) -> bool {
        self.min_depth > self.max_depth
    }
}

fn default_min_depth() -> usize {
    DepthLimits::default().min_depth
}

fn default_max_depth() -> usize {
    DepthLimits::default().max_depth
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// Log level for this verbosity
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }

    /// Verbosity from a `-v` flag count; 0 keeps `self`
    pub fn raised_by(self, flag_count: u8) -> Self {
        match flag_count {
            0 => self,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cascade: CascadeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CascaderResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CascaderResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CASCADER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
