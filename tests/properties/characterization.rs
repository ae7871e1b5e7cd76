//! Property tests for schema application.

use proptest::prelude::*;

use pcdm_works::domain::policies::{AlreadyThereStrategy, StrictStrategy};
use pcdm_works::domain::services::apply_schema;
use pcdm_works::domain::services::characterization::schemas::{schema_by_name, SCHEMA_NAMES};
use pcdm_works::{EntityType, WorksError};

fn schema_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(SCHEMA_NAMES.to_vec()), 1..6)
}

fn names(entity_type: &EntityType) -> Vec<String> {
    entity_type.properties().iter().map(|p| p.name.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying a sequence of schemas twice under the default
    /// strategy yields the same property set as applying it once.
    #[test]
    fn property_schema_application_idempotent(sequence in schema_names()) {
        let mut once = EntityType::new("GenericFile");
        for name in &sequence {
            apply_schema(&mut once, &schema_by_name(name).unwrap(), &AlreadyThereStrategy).unwrap();
        }

        let mut twice = once.clone();
        for name in &sequence {
            let application =
                apply_schema(&mut twice, &schema_by_name(name).unwrap(), &AlreadyThereStrategy)
                    .unwrap();
            prop_assert!(application.is_noop());
        }

        prop_assert_eq!(names(&once), names(&twice));
    }

    /// PROPERTY: a failing strict application never changes the target.
    #[test]
    fn property_strict_failure_is_atomic(first in prop::sample::select(SCHEMA_NAMES.to_vec()),
                                          second in prop::sample::select(SCHEMA_NAMES.to_vec())) {
        let mut target = EntityType::new("GenericFile");
        apply_schema(&mut target, &schema_by_name(first).unwrap(), &StrictStrategy).unwrap();
        let before = names(&target);

        match apply_schema(&mut target, &schema_by_name(second).unwrap(), &StrictStrategy) {
            Ok(application) => prop_assert_eq!(
                names(&target).len(),
                before.len() + application.added.len()
            ),
            Err(err) => {
                let is_conflict = matches!(err, WorksError::SchemaConflict { .. });
                prop_assert!(is_conflict);
                prop_assert_eq!(names(&target), before);
            }
        }
    }
}
