//! Index Use Case
//!
//! Checks a manifest, then projects every persisted entity into an index
//! document by reading it back from the store.

use serde::Serialize;

use crate::config::Config;
use crate::domain::ports::EntityStore;
use crate::error::WorksResult;
use crate::infrastructure::{IndexDocument, Manifest};

use super::check::{CheckResult, CheckUseCase};

/// An index document keyed by manifest name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedDocument {
    pub name: String,
    pub document: IndexDocument,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexResult {
    pub documents: Vec<NamedDocument>,
    #[serde(skip)]
    pub check: CheckResult,
}

pub struct IndexUseCase<S: EntityStore> {
    check: CheckUseCase<S>,
}

impl<S: EntityStore> IndexUseCase<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            check: CheckUseCase::new(config, store),
        }
    }

    pub fn execute(&mut self, manifest: Manifest) -> WorksResult<IndexResult> {
        let check = self.check.execute(manifest)?;
        let store = self.check.store();

        let documents = check
            .entities
            .iter()
            .filter_map(|checked| {
                let id = checked.id.as_ref()?;
                let entity = store.find(id).ok()?;
                Some(NamedDocument {
                    name: checked.name.clone(),
                    document: IndexDocument::project(&entity),
                })
            })
            .collect();

        Ok(IndexResult { documents, check })
    }
}
