//! Entity
//!
//! A repository object: works, generic files, collections and their plain
//! PCDM counterparts. An entity owns two separate membership channels:
//!
//! - `members`: ordered aggregation edges to other entities (duplicates kept)
//! - `files`: raw content files attached to this entity
//!
//! The two channels are never merged, so index projection can tell them apart.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::policies::PcdmNode;
use crate::domain::value_objects::{Capability, EntityId, EntityKey, Kind};
use crate::error::{WorksError, WorksResult};

use super::{ContentFile, EntityType};

/// Reference to a member entity, recorded in a parent's member list.
///
/// Equality is identity: two refs are equal when they point at the same
/// entity, whatever their recorded store identifier.
#[derive(Debug, Clone)]
pub struct MemberRef {
    key: EntityKey,
    kind: Kind,
    capabilities: &'static [Capability],
    id: Option<EntityId>,
}

impl MemberRef {
    pub fn key(&self) -> EntityKey {
        self.key
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Store identifier, if the member had been persisted when last seen
    pub fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl PartialEq for MemberRef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for MemberRef {}

impl PartialEq<Entity> for MemberRef {
    fn eq(&self, other: &Entity) -> bool {
        self.key == other.key
    }
}

impl<N: PcdmNode + ?Sized> From<&N> for MemberRef {
    /// Capture a node as a member reference.
    ///
    /// Nodes without an entity get a fresh key and never compare equal to
    /// anything else; aggregation rejects them before this point.
    fn from(node: &N) -> Self {
        let (key, id) = match node.entity() {
            Some(entity) => (entity.key, entity.id.clone()),
            None => (EntityKey::next(), None),
        };
        Self {
            key,
            kind: node.kind(),
            capabilities: node.capabilities(),
            id,
        }
    }
}

/// A repository object
#[derive(Debug, Clone)]
pub struct Entity {
    key: EntityKey,
    id: Option<EntityId>,
    kind: Kind,
    members: Vec<MemberRef>,
    files: Vec<ContentFile>,
    characterization: BTreeMap<String, Vec<String>>,
    date_modified: Option<DateTime<Utc>>,
}

impl Entity {
    /// Construct an unsaved entity of the given kind
    pub fn new(kind: Kind) -> Self {
        Self {
            key: EntityKey::next(),
            id: None,
            kind,
            members: Vec::new(),
            files: Vec::new(),
            characterization: BTreeMap::new(),
            date_modified: None,
        }
    }

    pub fn collection() -> Self {
        Self::new(Kind::Collection)
    }

    pub fn generic_work() -> Self {
        Self::new(Kind::GenericWork)
    }

    pub fn generic_file() -> Self {
        Self::new(Kind::GenericFile)
    }

    pub fn key(&self) -> EntityKey {
        self.key
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn date_modified(&self) -> Option<DateTime<Utc>> {
        self.date_modified
    }

    /// All aggregation members in insertion order
    pub fn members(&self) -> &[MemberRef] {
        &self.members
    }

    /// Members carrying `capability`, in insertion order, duplicates kept
    pub fn members_with(&self, capability: Capability) -> Vec<MemberRef> {
        self.members
            .iter()
            .filter(|m| m.has_capability(capability))
            .cloned()
            .collect()
    }

    /// Raw content files attached to this entity
    pub fn files(&self) -> &[ContentFile] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut [ContentFile] {
        &mut self.files
    }

    /// Attach a new, empty content file and return it for editing
    pub fn build_file(&mut self) -> &mut ContentFile {
        self.files.push(ContentFile::new());
        let last = self.files.len() - 1;
        &mut self.files[last]
    }

    /// Record a characterization value for a property defined on `entity_type`
    pub fn characterize(
        &mut self,
        entity_type: &EntityType,
        property: &str,
        value: impl Into<String>,
    ) -> WorksResult<()> {
        let definition =
            entity_type
                .property(property)
                .ok_or_else(|| WorksError::UnknownProperty {
                    property: property.to_string(),
                    target: entity_type.name().to_string(),
                })?;

        let values = self
            .characterization
            .entry(definition.name.clone())
            .or_default();
        if definition.multiple {
            values.push(value.into());
        } else {
            *values = vec![value.into()];
        }
        Ok(())
    }

    /// Characterization values recorded for `property`
    pub fn characterization(&self, property: &str) -> Option<&[String]> {
        self.characterization.get(property).map(Vec::as_slice)
    }

    pub fn characterization_values(&self) -> &BTreeMap<String, Vec<String>> {
        &self.characterization
    }

    pub(crate) fn push_member(&mut self, member: MemberRef) {
        self.members.push(member);
    }

    pub(crate) fn members_mut(&mut self) -> &mut [MemberRef] {
        &mut self.members
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    pub(crate) fn touch(&mut self, at: DateTime<Utc>) {
        self.date_modified = Some(at);
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entity {}

impl PcdmNode for Entity {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn entity(&self) -> Option<&Entity> {
        Some(self)
    }

    fn entity_mut(&mut self) -> Option<&mut Entity> {
        Some(self)
    }
}
