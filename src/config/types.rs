//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::EntityType;
use crate::domain::policies::StrategyKind;
use crate::domain::ports::{PcdmUseVocabulary, StaticVocabulary, UseVocabulary};
use crate::domain::services::characterization::schemas::{schema_by_name, SCHEMA_NAMES};
use crate::domain::services::EntityTypeBuilder;
use crate::error::WorksResult;

use super::loader::{self, ConfigWarning};

/// Allowed-use vocabulary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsesConfig {
    /// Additional acceptable use values
    #[serde(default)]
    pub allowed: Vec<String>,

    /// Whether the PCDM Use ontology terms are acceptable
    #[serde(default = "default_true")]
    pub include_pcdm_defaults: bool,
}

impl Default for UsesConfig {
    fn default() -> Self {
        Self {
            allowed: Vec::new(),
            include_pcdm_defaults: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Characterization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterizationConfig {
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Built-in schemas applied to the generic-file type, in order
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
}

impl Default for CharacterizationConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            schemas: default_schemas(),
        }
    }
}

fn default_schemas() -> Vec<String> {
    SCHEMA_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub uses: UsesConfig,

    #[serde(default)]
    pub characterization: CharacterizationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WorksResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WorksResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> WorksResult<Self> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PCDM_WORKS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Acceptable use values
    pub fn vocabulary(&self) -> StaticVocabulary {
        let mut uses = if self.uses.include_pcdm_defaults {
            PcdmUseVocabulary.allowed_pcdm_uses()
        } else {
            Vec::new()
        };
        for value in &self.uses.allowed {
            if !uses.contains(value) {
                uses.push(value.clone());
            }
        }
        StaticVocabulary::new(uses)
    }

    /// The generic-file type with the configured schemas applied
    pub fn entity_type(&self) -> WorksResult<EntityType> {
        let strategy = self.characterization.strategy.strategy();
        let mut builder = EntityTypeBuilder::new("GenericFile");
        for name in &self.characterization.schemas {
            builder = builder.apply(&schema_by_name(name)?, strategy.as_ref())?;
        }
        Ok(builder.build())
    }
}
