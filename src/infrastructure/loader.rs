//! Tree document loading
//!
//! A document is either a single tree object or an array of tree objects,
//! each in [`RawNode`] form.

use std::fs;
use std::path::Path;

use crate::domain::entities::RawNode;
use crate::error::{CascaderError, CascaderResult};

/// Parse a tree document from a string
pub fn parse_trees(content: &str) -> CascaderResult<Vec<RawNode>> {
    parse_document(content).map_err(|source| CascaderError::Json { file: None, source })
}

/// Read and parse a tree document from `path`
pub fn load_trees(path: &Path) -> CascaderResult<Vec<RawNode>> {
    let content = fs::read_to_string(path)?;
    let trees = parse_document(&content).map_err(|source| CascaderError::Json {
        file: Some(path.to_path_buf()),
        source,
    })?;
    log::debug!("loaded {} trees from {}", trees.len(), path.display());
    Ok(trees)
}

fn parse_document(content: &str) -> Result<Vec<RawNode>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|tree| vec![tree])
    }
}
