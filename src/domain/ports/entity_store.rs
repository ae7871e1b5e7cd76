//! EntityStore port
//!
//! The persistent object store. Aggregation never calls `save` itself;
//! callers batch membership changes and persist when they choose.

use crate::domain::entities::Entity;
use crate::domain::value_objects::{EntityId, Kind};

pub trait EntityStore {
    /// Persist `entity`, assigning an identifier on first save
    fn save(&mut self, entity: &mut Entity) -> Result<EntityId, StoreError>;

    /// Load a persisted entity
    fn find(&self, id: &EntityId) -> Result<Entity, StoreError>;

    /// Whether an entity with this identifier has been persisted
    fn exists(&self, id: &EntityId) -> bool;

    /// Construct and immediately persist an entity of `kind`
    fn create(&mut self, kind: Kind) -> Result<Entity, StoreError> {
        let mut entity = Entity::new(kind);
        self.save(&mut entity)?;
        Ok(entity)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity not found: {id}")]
    NotFound { id: EntityId },

    #[error("Failed to access store: {message}")]
    AccessError { message: String },
}
