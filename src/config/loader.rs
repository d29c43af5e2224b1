//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CascaderError, CascaderResult};

use super::types::{Config, Verbosity};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "cascader.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CascaderResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CascaderError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => log::warn!("ignoring {}: {}", project_config.display(), e),
            }
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("cascader/config.toml");
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => log::warn!("ignoring {}: {}", user_config.display(), e),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (CASCADER_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // CASCADER_MIN_DEPTH / CASCADER_MAX_DEPTH
    if let Some(depth) = env_usize("CASCADER_MIN_DEPTH") {
        config.cascade.min_depth = depth;
    }
    if let Some(depth) = env_usize("CASCADER_MAX_DEPTH") {
        config.cascade.max_depth = depth;
    }

    // CASCADER_VERBOSITY
    if let Ok(verbosity) = std::env::var("CASCADER_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            "trace" => Verbosity::Trace,
            _ => Verbosity::Normal,
        };
    }

    if config.cascade.is_inverted() {
        log::warn!(
            "min_depth {} is greater than max_depth {}; every group will be rejected",
            config.cascade.min_depth,
            config.cascade.max_depth
        );
    }

    config
}

fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cascade",
        "min_depth",
        "max_depth",
        "output",
        "verbosity",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
