//! Property tests for PCDM use validation.

use proptest::prelude::*;

use pcdm_works::domain::ports::StaticVocabulary;
use pcdm_works::{ContentFile, PcdmUseValidator, WorksError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation reports exactly the declared uses outside the
    /// vocabulary, in declaration order.
    #[test]
    fn property_reports_exactly_the_invalid_uses(
        allowed in prop::collection::vec("[a-z]{1,6}", 0..5),
        declared in prop::collection::vec("[a-z]{1,6}", 0..5),
    ) {
        let mut file = ContentFile::new();
        for value in &declared {
            file.add_use(value.clone());
        }

        let expected: Vec<String> = file
            .uses()
            .iter()
            .filter(|u| !allowed.contains(u))
            .cloned()
            .collect();

        let validator =
            PcdmUseValidator::with_vocabulary(&file, StaticVocabulary::new(allowed.clone()));
        match validator.validate() {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(WorksError::InvalidPcdmUse { values }) => prop_assert_eq!(values, expected),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
