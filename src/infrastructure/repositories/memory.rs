//! In-memory Entity Store
//!
//! Implements the EntityStore port with a map keyed by identifier.
//! Identifiers are time-ordered UUIDs minted on first save.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::domain::ports::{EntityStore, StoreError};
use crate::domain::value_objects::{EntityId, EntityKey};

#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    entities: HashMap<EntityId, Entity>,
    ids: HashMap<EntityKey, EntityId>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Identifier of a persisted entity, looked up by its in-memory key
    pub fn id_for(&self, key: EntityKey) -> Option<&EntityId> {
        self.ids.get(&key)
    }

    fn mint() -> EntityId {
        EntityId::new(Uuid::now_v7().to_string())
    }

    /// Fill in member identifiers the store already knows
    fn resolve_members(&self, entity: &mut Entity) {
        for member in entity.members_mut() {
            if member.id().is_none() {
                if let Some(id) = self.ids.get(&member.key()) {
                    member.set_id(id.clone());
                }
            }
        }
    }

    /// Stored parents that recorded `key` before it had an identifier
    fn backfill(&mut self, key: EntityKey, id: &EntityId) {
        for stored in self.entities.values_mut() {
            for member in stored.members_mut() {
                if member.key() == key && member.id().is_none() {
                    member.set_id(id.clone());
                }
            }
        }
    }
}

impl EntityStore for InMemoryEntityStore {
    fn save(&mut self, entity: &mut Entity) -> Result<EntityId, StoreError> {
        let id = match entity.id() {
            Some(id) => id.clone(),
            None => {
                let id = Self::mint();
                entity.assign_id(id.clone());
                id
            }
        };

        for file in entity.files_mut() {
            if file.id().is_none() {
                file.assign_id(Self::mint());
            }
        }
        self.resolve_members(entity);
        entity.touch(Utc::now());

        let first_save = self.ids.insert(entity.key(), id.clone()).is_none();
        if first_save {
            self.backfill(entity.key(), &id);
        }
        self.entities.insert(id.clone(), entity.clone());

        debug!(id = %id, kind = %entity.kind(), first_save, "saved entity");
        Ok(id)
    }

    fn find(&self, id: &EntityId) -> Result<Entity, StoreError> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    fn exists(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }
}
