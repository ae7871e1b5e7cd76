//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WorksError, WorksResult};

use super::types::{Config, LogLevel};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "pcdm-works.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WorksResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| WorksError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WorksError::InvalidConfig {
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
///
/// The first config file that exists is used; a file that exists but fails
/// to parse is an error rather than a silent fall-through to the next layer.
pub fn load_or_default(project_root: Option<&Path>) -> WorksResult<Config> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Config::load(&project_config).map(with_env_overrides);
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return Config::load(&user_config).map(with_env_overrides);
        }
    }

    Ok(with_env_overrides(Config::default()))
}

/// Apply environment variable overrides (PCDM_WORKS_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // PCDM_WORKS_ALLOWED_USES (comma-separated, added to the configured list)
    if let Ok(uses) = std::env::var("PCDM_WORKS_ALLOWED_USES") {
        for value in uses.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !config.uses.allowed.iter().any(|u| u == value) {
                config.uses.allowed.push(value.to_string());
            }
        }
    }

    // PCDM_WORKS_SCHEMA_STRATEGY
    if let Ok(strategy) = std::env::var("PCDM_WORKS_SCHEMA_STRATEGY") {
        if let Ok(kind) = strategy.parse() {
            config.characterization.strategy = kind;
        }
    }

    // PCDM_WORKS_LOG
    if let Ok(level) = std::env::var("PCDM_WORKS_LOG") {
        config.logging.level = match level.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        };
    }

    config
}

/// `<config dir>/pcdm-works/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pcdm-works").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "uses",
        "allowed",
        "include_pcdm_defaults",
        "characterization",
        "strategy",
        "schemas",
        "logging",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
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
