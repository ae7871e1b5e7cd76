pub mod check;
pub mod index;
pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};
use pcdm_works::config::Config;

/// Load configuration from an explicit path, or the project/user hierarchy
pub fn load_config(path: Option<&Path>, json: bool) -> Result<Config> {
    let Some(path) = path else {
        let project_root = std::env::current_dir()?;
        return Config::load_or_default(Some(&project_root)).context("failed to load config");
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;

    if !json {
        for warning in &warnings {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            match &warning.suggestion {
                Some(suggestion) => eprintln!(
                    "warning: unknown config key '{}' at {} (did you mean '{}'?)",
                    warning.key, location, suggestion
                ),
                None => eprintln!("warning: unknown config key '{}' at {}", warning.key, location),
            }
        }
    }

    Ok(config.with_env_overrides())
}
