//! Search index projection
//!
//! Projects an entity into a flat index document. Generic-file members and
//! raw content files go to separate fields and never share one.

use serde::Serialize;

use crate::domain::entities::{Entity, MemberRef};
use crate::domain::services::DeclaresUses;
use crate::domain::value_objects::Capability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub has_model_ssim: String,
    pub generic_files_ssim: Vec<String>,
    pub generic_works_ssim: Vec<String>,
    pub collections_ssim: Vec<String>,
    pub files_ssim: Vec<String>,
    pub pcdm_use_ssim: Vec<String>,
}

impl IndexDocument {
    /// Project a persisted or unsaved entity.
    ///
    /// Members and files without an identifier are left out.
    pub fn project(entity: &Entity) -> Self {
        Self {
            id: entity.id().map(|id| id.to_string()),
            has_model_ssim: entity.kind().model_name().to_string(),
            generic_files_ssim: member_ids(entity, Capability::GenericFile),
            generic_works_ssim: member_ids(entity, Capability::GenericWork),
            collections_ssim: member_ids(entity, Capability::Collection),
            files_ssim: entity
                .files()
                .iter()
                .filter_map(|f| f.id().map(|id| id.to_string()))
                .collect(),
            pcdm_use_ssim: entity.pcdm_uses(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn member_ids(entity: &Entity, capability: Capability) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in entity
        .members_with(capability)
        .iter()
        .filter_map(MemberRef::id)
    {
        let id = id.to_string();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
