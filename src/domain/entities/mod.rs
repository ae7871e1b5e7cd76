//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Entity` - A work, generic file, collection or plain PCDM object
//! - `ContentFile` - A raw content file attached to an entity
//! - `Schema` / `EntityType` - Characterization property sets

mod content_file;
mod entity;
mod property;

pub use content_file::ContentFile;
pub use entity::{Entity, MemberRef};
pub use property::{EntityType, PropertyDefinition, Schema};
