//! PCDM use validation
//!
//! Checks that every use declared on a content-bearing entity is drawn from
//! the allowed vocabulary. Validation never mutates its target.

use tracing::warn;

use crate::domain::entities::{ContentFile, Entity};
use crate::domain::ports::{PcdmUseVocabulary, UseVocabulary};
use crate::error::{WorksError, WorksResult};

/// Something that declares PCDM uses
pub trait DeclaresUses {
    /// Declared use values, in declaration order
    fn pcdm_uses(&self) -> Vec<String>;
}

impl DeclaresUses for ContentFile {
    fn pcdm_uses(&self) -> Vec<String> {
        self.uses().to_vec()
    }
}

/// An entity declares the uses of its content files
impl DeclaresUses for Entity {
    fn pcdm_uses(&self) -> Vec<String> {
        let mut uses: Vec<String> = Vec::new();
        for value in self.files().iter().flat_map(|f| f.uses()) {
            if !uses.contains(value) {
                uses.push(value.clone());
            }
        }
        uses
    }
}

/// Validator for one target.
///
/// The vocabulary is injected; `new` uses the PCDM Use ontology.
pub struct PcdmUseValidator<'a, T: DeclaresUses + ?Sized> {
    target: &'a T,
    vocabulary: Box<dyn UseVocabulary + 'a>,
}

impl<'a, T: DeclaresUses + ?Sized> PcdmUseValidator<'a, T> {
    pub fn new(target: &'a T) -> Self {
        Self::with_vocabulary(target, PcdmUseVocabulary)
    }

    pub fn with_vocabulary(target: &'a T, vocabulary: impl UseVocabulary + 'a) -> Self {
        Self {
            target,
            vocabulary: Box::new(vocabulary),
        }
    }

    /// Validate `target` against the default vocabulary
    pub fn validate_target(target: &'a T) -> WorksResult<()> {
        Self::new(target).validate()
    }

    pub fn allowed_pcdm_uses(&self) -> Vec<String> {
        self.vocabulary.allowed_pcdm_uses()
    }

    pub fn pcdm_uses(&self) -> Vec<String> {
        self.target.pcdm_uses()
    }

    /// Fail with every declared use outside the allowed vocabulary
    pub fn validate(&self) -> WorksResult<()> {
        let allowed = self.allowed_pcdm_uses();
        let invalid: Vec<String> = self
            .pcdm_uses()
            .into_iter()
            .filter(|u| !allowed.contains(u))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        warn!(uses = ?invalid, "rejected PCDM uses");
        Err(WorksError::InvalidPcdmUse { values: invalid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StaticVocabulary;
    use crate::domain::value_objects::PcdmUse;

    struct StubTarget(Vec<&'static str>);

    impl DeclaresUses for StubTarget {
        fn pcdm_uses(&self) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn test_vocabulary() -> StaticVocabulary {
        StaticVocabulary::new(["valid use", "another valid use"])
    }

    #[test]
    fn invalid_use_raises() {
        let target = StubTarget(vec!["invalid use"]);
        let validator = PcdmUseValidator::with_vocabulary(&target, test_vocabulary());
        assert_eq!(
            validator.validate(),
            Err(WorksError::InvalidPcdmUse {
                values: vec!["invalid use".to_string()]
            })
        );
    }

    #[test]
    fn valid_use_passes() {
        let target = StubTarget(vec!["valid use"]);
        let validator = PcdmUseValidator::with_vocabulary(&target, test_vocabulary());
        assert_eq!(validator.validate(), Ok(()));
    }

    #[test]
    fn reports_every_offending_value_in_order() {
        let target = StubTarget(vec!["b", "valid use", "a"]);
        let validator = PcdmUseValidator::with_vocabulary(&target, test_vocabulary());
        let err = validator.validate().unwrap_err();
        assert_eq!(
            err,
            WorksError::InvalidPcdmUse {
                values: vec!["b".to_string(), "a".to_string()]
            }
        );
    }

    #[test]
    fn no_declared_uses_is_valid() {
        let target = StubTarget(vec![]);
        assert!(PcdmUseValidator::with_vocabulary(&target, test_vocabulary())
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_target_uses_pcdm_vocabulary() {
        let mut file_set = Entity::generic_file();
        file_set
            .build_file()
            .add_use(PcdmUse::OriginalFile.uri());
        file_set
            .build_file()
            .add_use(PcdmUse::ThumbnailImage.uri());
        assert!(PcdmUseValidator::validate_target(&file_set).is_ok());

        file_set.build_file().add_use("http://example.org/use#Poster");
        let err = PcdmUseValidator::validate_target(&file_set).unwrap_err();
        assert_eq!(err.to_string(), "invalid PCDM use: http://example.org/use#Poster");
    }

    #[test]
    fn validation_does_not_mutate_target() {
        let mut file_set = Entity::generic_file();
        file_set.build_file().add_use("bogus");
        let before = file_set.pcdm_uses();
        let _ = PcdmUseValidator::validate_target(&file_set);
        assert_eq!(file_set.pcdm_uses(), before);
        assert_eq!(file_set.files().len(), 1);
    }

    #[test]
    fn entity_uses_combine_content_files_without_repeats() {
        let mut file_set = Entity::generic_file();
        file_set.build_file().add_use("x").add_use("y");
        file_set.build_file().add_use("y").add_use("z");
        assert_eq!(file_set.pcdm_uses(), vec!["x", "y", "z"]);
    }

    #[test]
    fn content_file_validates_directly() {
        let mut file = ContentFile::new();
        file.add_use("valid use");
        let validator = PcdmUseValidator::with_vocabulary(&file, test_vocabulary());
        assert_eq!(validator.pcdm_uses(), vec!["valid use".to_string()]);
        assert!(validator.validate().is_ok());
    }
}
