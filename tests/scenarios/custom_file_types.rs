//! Application-defined types that opt in to generic-file behavior.

use pcdm_works::domain::policies::is_generic_file;
use pcdm_works::{
    add_generic_file_to_generic_file, get_generic_files_from_generic_file, Capability, Entity,
    Kind, PcdmNode,
};

/// A store object that declares generic-file behavior itself
struct Page {
    entity: Entity,
    page_number: u32,
}

impl Page {
    fn new(page_number: u32) -> Self {
        Self {
            entity: Entity::new(Kind::Opaque),
            page_number,
        }
    }
}

impl PcdmNode for Page {
    fn kind(&self) -> Kind {
        self.entity.kind()
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::GenericFile, Capability::PcdmObject]
    }

    fn entity(&self) -> Option<&Entity> {
        Some(&self.entity)
    }

    fn entity_mut(&mut self) -> Option<&mut Entity> {
        Some(&mut self.entity)
    }
}

/// A bare store object with no declared behavior
struct Blob {
    entity: Entity,
}

impl PcdmNode for Blob {
    fn kind(&self) -> Kind {
        self.entity.kind()
    }

    fn entity(&self) -> Option<&Entity> {
        Some(&self.entity)
    }
}

#[test]
fn declared_capability_qualifies_as_generic_file() {
    let mut cover = Page::new(0);
    let first = Page::new(1);
    assert!(is_generic_file(&cover));
    assert_eq!(first.page_number, 1);

    add_generic_file_to_generic_file(&mut cover, &first).unwrap();
    add_generic_file_to_generic_file(&mut cover, &Entity::generic_file()).unwrap();

    let members = get_generic_files_from_generic_file(&cover);
    assert_eq!(members.len(), 2);
    assert!(members[0].has_capability(Capability::GenericFile));
}

#[test]
fn bare_store_object_is_rejected_on_both_sides() {
    let mut blob = Blob {
        entity: Entity::new(Kind::Opaque),
    };
    let mut page = Page::new(1);

    let err = add_generic_file_to_generic_file(&mut blob, &page).unwrap_err();
    assert_eq!(
        err.to_string(),
        "parent_generic_file must be a hydra-works generic file"
    );

    let err = add_generic_file_to_generic_file(&mut page, &blob).unwrap_err();
    assert_eq!(
        err.to_string(),
        "child_generic_file must be a hydra-works generic file"
    );
    assert!(get_generic_files_from_generic_file(&page).is_empty());
}
