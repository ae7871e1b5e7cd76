//! Property tests for the aggregation type gate.

use proptest::prelude::*;

use pcdm_works::domain::policies::has_capability;
use pcdm_works::{
    add_generic_file_to_generic_file, get_generic_files_from_generic_file, Capability, Entity,
    Kind, Relationship,
};

fn any_kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

fn non_generic_file_kind() -> impl Strategy<Value = Kind> {
    any_kind().prop_filter("lacks generic-file capability", |k| {
        !k.capabilities().contains(&Capability::GenericFile)
    })
}

fn any_relationship() -> impl Strategy<Value = Relationship> {
    prop::sample::select(Relationship::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a parent without generic-file capability is always rejected
    /// with the parent message, whatever the child is.
    #[test]
    fn property_invalid_parent_rejected_first(
        parent_kind in non_generic_file_kind(),
        child_kind in any_kind(),
    ) {
        let mut parent = Entity::new(parent_kind);
        let child = Entity::new(child_kind);

        let err = add_generic_file_to_generic_file(&mut parent, &child).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            "parent_generic_file must be a hydra-works generic file"
        );
        prop_assert!(parent.members().is_empty());
    }

    /// PROPERTY: a valid parent rejects every child lacking the capability.
    #[test]
    fn property_invalid_child_rejected(child_kind in non_generic_file_kind()) {
        let mut parent = Entity::generic_file();
        let child = Entity::new(child_kind);

        let err = add_generic_file_to_generic_file(&mut parent, &child).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            "child_generic_file must be a hydra-works generic file"
        );
        prop_assert!(get_generic_files_from_generic_file(&parent).is_empty());
    }

    /// PROPERTY: plain values are never accepted as children.
    #[test]
    fn property_strings_are_never_members(value in ".*") {
        let mut parent = Entity::generic_file();
        prop_assert!(add_generic_file_to_generic_file(&mut parent, value.as_str()).is_err());
        prop_assert!(parent.members().is_empty());
    }

    /// PROPERTY: repeated additions are kept in order without deduplication.
    #[test]
    fn property_duplicates_preserved(repeats in 1usize..8) {
        let mut parent = Entity::generic_file();
        let child = Entity::generic_file();

        for _ in 0..repeats {
            add_generic_file_to_generic_file(&mut parent, &child).unwrap();
        }

        let members = get_generic_files_from_generic_file(&parent);
        prop_assert_eq!(members.len(), repeats);
        prop_assert!(members.iter().all(|m| m == &child));
    }

    /// PROPERTY: every relationship accepts exactly the kinds whose
    /// capabilities satisfy both sides, and only then appends.
    #[test]
    fn property_relationship_gate_matches_capabilities(
        relationship in any_relationship(),
        parent_kind in any_kind(),
        child_kind in any_kind(),
    ) {
        let mut parent = Entity::new(parent_kind);
        let child = Entity::new(child_kind);

        let parent_ok = has_capability(&parent, relationship.parent().capability);
        let child_ok = has_capability(&child, relationship.child().capability);
        let outcome = relationship.add(&mut parent, &child);

        prop_assert_eq!(outcome.is_ok(), parent_ok && child_ok);
        prop_assert_eq!(parent.members().len(), usize::from(parent_ok && child_ok));
        if let Err(err) = outcome {
            let expected = if parent_ok { relationship.child() } else { relationship.parent() };
            prop_assert!(err.to_string().starts_with(expected.label));
        }
    }
}
