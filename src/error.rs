//! Error types for Cascader
//!
//! Core tree operations are total and report "not found" through `Option`/`bool`.
//! These errors cover the fallible surfaces around them: loading, configuration
//! and the caller-level shape policy.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cascader operations
pub type CascaderResult<T> = Result<T, CascaderError>;

/// Main error type for Cascader operations
#[derive(Error, Debug)]
pub enum CascaderError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree document could not be parsed
    #[error("invalid tree document{}: {source}", display_origin(.file))]
    Json {
        file: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// The root of the tree has no children, so there is nothing to pick
    #[error("tree '{root}' has no children to choose from")]
    EmptyTree { root: String },

    /// Tree depth outside the supported range
    #[error("tree '{root}' has depth {depth}, supported depths are {min}..={max}")]
    UnsupportedDepth {
        root: String,
        depth: usize,
        min: usize,
        max: usize,
    },

    /// Group index out of range
    #[error("no group at index {index} (menu bar has {count} groups)")]
    GroupNotFound { index: usize, count: usize },

    /// Pick argument could not be parsed
    #[error("invalid pick '{spec}', expected LEVEL:POSITION")]
    InvalidPick { spec: String },
}

fn display_origin(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}
