//! TOML repository manifest
//!
//! Describes a batch of entities and the memberships between them:
//!
//! ```toml
//! [[entity]]
//! name = "book"
//! kind = "generic_work"
//!
//! [[entity]]
//! name = "page1"
//! kind = "generic_file"
//! characterization = { height = 1200, width = 800 }
//!
//! [[entity.file]]
//! name = "page1.tif"
//! mime_type = "image/tiff"
//! uses = ["http://pcdm.org/use#OriginalFile"]
//!
//! [[member]]
//! parent = "book"
//! child = "page1"
//! ```
//!
//! Memberships are kept in file order; `relation` is optional and inferred
//! from the two kinds when absent.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::Entity;
use crate::domain::services::Relationship;
use crate::domain::value_objects::Kind;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("duplicate entity name '{name}' in {path}")]
    DuplicateName { path: PathBuf, name: String },

    #[error("unknown relation '{relation}' in {path}")]
    UnknownRelation { path: PathBuf, relation: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestDoc {
    #[serde(default, rename = "entity")]
    entities: Vec<EntityDoc>,
    #[serde(default, rename = "member")]
    members: Vec<MemberDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityDoc {
    name: String,
    kind: Kind,
    #[serde(default, rename = "file")]
    files: Vec<FileDoc>,
    #[serde(default)]
    characterization: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDoc {
    name: Option<String>,
    mime_type: Option<String>,
    size: Option<u64>,
    #[serde(default)]
    uses: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemberDoc {
    parent: String,
    child: String,
    relation: Option<String>,
}

/// A named entity loaded from a manifest
#[derive(Debug, Clone)]
pub struct ManifestEntity {
    pub name: String,
    pub entity: Entity,
    /// Raw characterization values, applied against an entity type later
    pub characterization: Vec<(String, String)>,
}

/// A requested membership, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestMember {
    pub parent: String,
    pub child: String,
    pub relation: Option<Relationship>,
}

#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub entities: Vec<ManifestEntity>,
    pub members: Vec<ManifestMember>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let doc: ManifestDoc = toml::from_str(content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut entities: Vec<ManifestEntity> = Vec::with_capacity(doc.entities.len());
        for entity_doc in doc.entities {
            if entities.iter().any(|e| e.name == entity_doc.name) {
                return Err(ManifestError::DuplicateName {
                    path: path.to_path_buf(),
                    name: entity_doc.name,
                });
            }
            entities.push(build_entity(entity_doc));
        }

        let members = doc
            .members
            .into_iter()
            .map(|m| -> Result<ManifestMember, ManifestError> {
                let relation = match m.relation {
                    Some(name) => Some(Relationship::parse(&name).ok_or_else(|| {
                        ManifestError::UnknownRelation {
                            path: path.to_path_buf(),
                            relation: name.clone(),
                        }
                    })?),
                    None => None,
                };
                Ok(ManifestMember {
                    parent: m.parent,
                    child: m.child,
                    relation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            entities,
            members,
        })
    }

    /// Index of the named entity in `entities`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.name == name)
    }
}

fn build_entity(doc: EntityDoc) -> ManifestEntity {
    let mut entity = Entity::new(doc.kind);
    for file_doc in doc.files {
        let file = entity.build_file();
        file.original_name = file_doc.name;
        file.mime_type = file_doc.mime_type;
        file.size = file_doc.size;
        for use_value in file_doc.uses {
            file.add_use(use_value);
        }
    }

    let characterization = doc
        .characterization
        .into_iter()
        .flat_map(|(name, value)| {
            scalar_strings(value)
                .into_iter()
                .map(move |v| (name.clone(), v))
        })
        .collect();

    ManifestEntity {
        name: doc.name,
        entity,
        characterization,
    }
}

fn scalar_strings(value: toml::Value) -> Vec<String> {
    match value {
        toml::Value::String(s) => vec![s],
        toml::Value::Array(items) => items.into_iter().flat_map(scalar_strings).collect(),
        other => vec![other.to_string()],
    }
}
