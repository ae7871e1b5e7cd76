//! Schema conflict strategies
//!
//! Decides what happens when a schema defines a property the target type
//! already has. Strategies are injected into the schema applier, the same
//! way conflict resolvers are injected into deployment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{EntityType, PropertyDefinition, Schema};
use crate::error::{WorksError, WorksResult};

/// Outcome for one conflicting property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Keep the existing definition; do not redefine
    Skip,
}

/// Policy applied when a property name is already defined on the target
pub trait ConflictStrategy: Send + Sync {
    /// Resolve a single conflict, or fail the whole application
    fn resolve(
        &self,
        target: &EntityType,
        schema: &Schema,
        existing: &PropertyDefinition,
    ) -> WorksResult<ConflictResolution>;
}

/// Leaves already-present properties alone.
///
/// Re-applying a schema under this strategy is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlreadyThereStrategy;

impl ConflictStrategy for AlreadyThereStrategy {
    fn resolve(
        &self,
        _target: &EntityType,
        _schema: &Schema,
        _existing: &PropertyDefinition,
    ) -> WorksResult<ConflictResolution> {
        Ok(ConflictResolution::Skip)
    }
}

/// Fails on any redefinition.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictStrategy;

impl ConflictStrategy for StrictStrategy {
    fn resolve(
        &self,
        target: &EntityType,
        schema: &Schema,
        existing: &PropertyDefinition,
    ) -> WorksResult<ConflictResolution> {
        Err(WorksError::SchemaConflict {
            schema: schema.name().to_string(),
            property: existing.name.clone(),
            target: target.name().to_string(),
        })
    }
}

/// Strategy selection as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    AlreadyThere,
    Strict,
}

impl StrategyKind {
    pub fn strategy(&self) -> Box<dyn ConflictStrategy> {
        match self {
            StrategyKind::AlreadyThere => Box::new(AlreadyThereStrategy),
            StrategyKind::Strict => Box::new(StrictStrategy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::AlreadyThere => write!(f, "already_there"),
            StrategyKind::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "already_there" => Ok(StrategyKind::AlreadyThere),
            "strict" => Ok(StrategyKind::Strict),
            other => Err(format!("unknown schema strategy '{}'", other)),
        }
    }
}
