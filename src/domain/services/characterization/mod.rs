//! Characterization schema application
//!
//! Attaches named property schemas to an entity type at registration time.
//! What happens when a property is already defined is decided by an
//! injected `ConflictStrategy`.

pub mod schemas;

use tracing::debug;

use crate::domain::entities::{EntityType, PropertyDefinition, Schema};
use crate::domain::policies::{ConflictResolution, ConflictStrategy};
use crate::error::WorksResult;

/// What applying one schema did to the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaApplication {
    /// Properties newly defined on the target
    pub added: Vec<String>,
    /// Properties already present and left untouched
    pub skipped: Vec<String>,
}

impl SchemaApplication {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty()
    }
}

/// Apply `schema` to `target`.
///
/// All conflicts are resolved before anything is defined, so a failing
/// strategy leaves `target` unchanged.
pub fn apply_schema(
    target: &mut EntityType,
    schema: &Schema,
    strategy: &dyn ConflictStrategy,
) -> WorksResult<SchemaApplication> {
    let mut application = SchemaApplication::default();
    let mut pending: Vec<&PropertyDefinition> = Vec::new();

    for definition in schema.properties() {
        let already = target.property(&definition.name).or_else(|| {
            pending
                .iter()
                .copied()
                .find(|p: &&PropertyDefinition| p.name == definition.name)
        });
        match already {
            Some(existing) => match strategy.resolve(target, schema, existing)? {
                ConflictResolution::Skip => application.skipped.push(definition.name.clone()),
            },
            None => pending.push(definition),
        }
    }

    for definition in pending {
        application.added.push(definition.name.clone());
        target.define(definition.clone());
    }

    debug!(
        schema = schema.name(),
        target = target.name(),
        added = application.added.len(),
        skipped = application.skipped.len(),
        "applied schema"
    );
    Ok(application)
}

/// Composes an entity type from schemas, once, at registration time.
#[derive(Debug, Clone)]
pub struct EntityTypeBuilder {
    entity_type: EntityType,
}

impl EntityTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::new(name),
        }
    }

    /// Apply a schema with the given strategy
    pub fn apply(mut self, schema: &Schema, strategy: &dyn ConflictStrategy) -> WorksResult<Self> {
        apply_schema(&mut self.entity_type, schema, strategy)?;
        Ok(self)
    }

    pub fn build(self) -> EntityType {
        self.entity_type
    }
}
