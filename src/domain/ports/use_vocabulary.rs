//! UseVocabulary port
//!
//! Supplies the controlled vocabulary of acceptable file uses. The default
//! is the PCDM Use ontology; deployments may back it with an ontology
//! service or configuration.

use crate::domain::value_objects::PcdmUse;

pub trait UseVocabulary: Send + Sync {
    /// Acceptable use values
    fn allowed_pcdm_uses(&self) -> Vec<String>;
}

/// The terms of the PCDM Use ontology
#[derive(Debug, Clone, Copy, Default)]
pub struct PcdmUseVocabulary;

impl UseVocabulary for PcdmUseVocabulary {
    fn allowed_pcdm_uses(&self) -> Vec<String> {
        PcdmUse::ALL.iter().map(PcdmUse::uri).collect()
    }
}

/// An explicit list of acceptable uses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVocabulary {
    uses: Vec<String>,
}

impl StaticVocabulary {
    pub fn new<I, S>(uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uses: uses.into_iter().map(Into::into).collect(),
        }
    }
}

impl UseVocabulary for StaticVocabulary {
    fn allowed_pcdm_uses(&self) -> Vec<String> {
        self.uses.clone()
    }
}
