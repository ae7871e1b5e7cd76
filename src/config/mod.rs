//! Configuration module for pcdm-works
//!
//! Configuration hierarchy:
//! 1. CLI `--config` path (highest priority)
//! 2. Environment variables (PCDM_WORKS_*)
//! 3. Project config (./pcdm-works.toml)
//! 4. User config (<config dir>/pcdm-works/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CharacterizationConfig, Config, LogLevel, LoggingConfig, UsesConfig};
