//! Content file entity
//!
//! A raw content file (PCDM File) attached to an entity. Bytes live in an
//! external content store; only the file's metadata and declared uses are
//! tracked here.

use crate::domain::policies::PcdmNode;
use crate::domain::value_objects::{EntityId, EntityKey, Kind};

#[derive(Debug, Clone)]
pub struct ContentFile {
    key: EntityKey,
    id: Option<EntityId>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    uses: Vec<String>,
}

impl ContentFile {
    pub fn new() -> Self {
        Self {
            key: EntityKey::next(),
            id: None,
            original_name: None,
            mime_type: None,
            size: None,
            uses: Vec::new(),
        }
    }

    pub fn key(&self) -> EntityKey {
        self.key
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    /// Declared use values, in declaration order
    pub fn uses(&self) -> &[String] {
        &self.uses
    }

    /// Declare a use for this file. Repeated values are kept once.
    pub fn add_use(&mut self, use_value: impl Into<String>) -> &mut Self {
        let use_value = use_value.into();
        if !self.uses.contains(&use_value) {
            self.uses.push(use_value);
        }
        self
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.original_name = Some(name.into());
        self
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Default for ContentFile {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ContentFile {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ContentFile {}

impl PcdmNode for ContentFile {
    fn kind(&self) -> Kind {
        Kind::PcdmFile
    }
}
