//! Check Use Case
//!
//! Loads a manifest into an entity store: characterization values are
//! recorded against the configured entity type, memberships are applied in
//! manifest order, declared uses are validated, and every entity is saved.
//! Each rejected step becomes a [`Problem`]; later steps still run.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::Entity;
use crate::domain::ports::EntityStore;
use crate::domain::services::{PcdmUseValidator, Relationship};
use crate::domain::value_objects::{EntityId, Kind};
use crate::error::WorksResult;
use crate::infrastructure::{Manifest, ManifestMember};

/// What went wrong with one manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// A membership names an entity the manifest does not define
    UnknownEntity,
    /// A membership names the same entity as parent and child
    SelfMembership,
    /// No relationship fits the two kinds
    NoRelationship,
    /// The relationship rejected the parent or child
    InvalidKind,
    /// A declared use is outside the configured vocabulary
    InvalidUse,
    /// A characterization value names an undefined property
    UnknownProperty,
    /// The store refused to persist the entity
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Manifest name of the entity the problem is reported against
    pub entity: String,
    pub kind: ProblemKind,
    pub message: String,
}

/// A manifest entity after it has been checked and saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedEntity {
    pub name: String,
    pub kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub members: usize,
    pub files: usize,
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub entities: Vec<CheckedEntity>,
    pub memberships_applied: usize,
    pub problems: Vec<Problem>,
}

impl CheckResult {
    /// Check if the manifest produced no problems
    pub fn is_success(&self) -> bool {
        self.problems.is_empty()
    }

    fn problem(&mut self, entity: &str, kind: ProblemKind, message: impl Into<String>) {
        self.problems.push(Problem {
            entity: entity.to_string(),
            kind,
            message: message.into(),
        });
    }
}

/// Check Use Case
pub struct CheckUseCase<S: EntityStore> {
    config: Config,
    store: S,
}

impl<S: EntityStore> CheckUseCase<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute the check operation
    ///
    /// Fails only when the configuration cannot produce an entity type;
    /// problems with the manifest itself are reported in the result.
    pub fn execute(&mut self, manifest: Manifest) -> WorksResult<CheckResult> {
        let entity_type = self.config.entity_type()?;
        let mut result = CheckResult::default();

        // Entries keep manifest order, so manifest positions index them.
        let resolved: Vec<(Option<usize>, Option<usize>)> = manifest
            .members
            .iter()
            .map(|m| (manifest.position(&m.parent), manifest.position(&m.child)))
            .collect();

        let mut entries: Vec<(String, Entity)> = Vec::with_capacity(manifest.entities.len());
        for mut item in manifest.entities {
            for (property, value) in item.characterization {
                if let Err(e) = item.entity.characterize(&entity_type, &property, value) {
                    result.problem(&item.name, ProblemKind::UnknownProperty, e.to_string());
                }
            }
            entries.push((item.name, item.entity));
        }

        for (member, positions) in manifest.members.iter().zip(resolved) {
            if apply_member(&mut entries, member, positions, &mut result) {
                result.memberships_applied += 1;
            }
        }

        for (name, entity) in &entries {
            let validator = PcdmUseValidator::with_vocabulary(entity, self.config.vocabulary());
            if let Err(e) = validator.validate() {
                result.problem(name, ProblemKind::InvalidUse, e.to_string());
            }
        }

        for (name, entity) in &mut entries {
            if let Err(e) = self.store.save(entity) {
                result.problem(name, ProblemKind::Store, e.to_string());
            }
            result.entities.push(CheckedEntity {
                name: name.clone(),
                kind: entity.kind(),
                id: entity.id().cloned(),
                members: entity.members().len(),
                files: entity.files().len(),
            });
        }

        info!(
            manifest = %manifest.path.display(),
            entities = result.entities.len(),
            memberships = result.memberships_applied,
            problems = result.problems.len(),
            "checked manifest"
        );
        Ok(result)
    }
}

/// Apply one membership, recording a problem when it is rejected
fn apply_member(
    entries: &mut [(String, Entity)],
    member: &ManifestMember,
    positions: (Option<usize>, Option<usize>),
    result: &mut CheckResult,
) -> bool {
    let (parent_idx, child_idx) = match positions {
        (Some(p), Some(c)) => (p, c),
        (None, _) => {
            result.problem(
                &member.parent,
                ProblemKind::UnknownEntity,
                format!("unknown entity '{}'", member.parent),
            );
            return false;
        }
        (_, None) => {
            result.problem(
                &member.child,
                ProblemKind::UnknownEntity,
                format!("unknown entity '{}'", member.child),
            );
            return false;
        }
    };

    if parent_idx == child_idx {
        result.problem(
            &member.parent,
            ProblemKind::SelfMembership,
            format!("'{}' cannot be a member of itself", member.parent),
        );
        return false;
    }

    let child = entries[child_idx].1.clone();
    let parent = &mut entries[parent_idx].1;

    let relation = match member
        .relation
        .or_else(|| Relationship::infer(parent.kind(), child.kind()))
    {
        Some(relation) => relation,
        None => {
            result.problem(
                &member.parent,
                ProblemKind::NoRelationship,
                format!("a {} cannot aggregate a {}", parent.kind(), child.kind()),
            );
            return false;
        }
    };

    match relation.add(parent, &child) {
        Ok(()) => {
            debug!(parent = %member.parent, child = %member.child, %relation, "applied membership");
            true
        }
        Err(e) => {
            result.problem(&member.parent, ProblemKind::InvalidKind, e.to_string());
            false
        }
    }
}
