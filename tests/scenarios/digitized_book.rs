//! A work with page files, a derivative nested in a page, and a collection.

use pcdm_works::domain::ports::EntityStore;
use pcdm_works::domain::services::{
    add_generic_file_to_generic_work, add_generic_work_to_collection,
    get_generic_files_from_generic_work, get_generic_works_from_collection,
};
use pcdm_works::domain::services::characterization::schemas::characterization_type;
use pcdm_works::infrastructure::{IndexDocument, InMemoryEntityStore};
use pcdm_works::{
    add_generic_file_to_generic_file, get_generic_files_from_generic_file, Entity, Kind, MemberRef,
    PcdmUseValidator,
};

#[test]
fn nested_files_survive_persistence() {
    let mut store = InMemoryEntityStore::new();
    let mut page = store.create(Kind::GenericFile).unwrap();
    let thumbnail = store.create(Kind::GenericFile).unwrap();
    let ocr = store.create(Kind::GenericFile).unwrap();

    add_generic_file_to_generic_file(&mut page, &thumbnail).unwrap();
    add_generic_file_to_generic_file(&mut page, &ocr).unwrap();
    assert!(page.date_modified().is_some());
    let before = page.date_modified();

    // Appending does not persist
    let page_id = page.id().cloned().unwrap();
    assert!(store.find(&page_id).unwrap().members().is_empty());

    store.save(&mut page).unwrap();
    assert!(page.date_modified() >= before);

    let reloaded = store.find(&page_id).unwrap();
    let members = get_generic_files_from_generic_file(&reloaded);
    assert_eq!(members, vec![MemberRef::from(&thumbnail), MemberRef::from(&ocr)]);
    assert_eq!(members[0].id(), thumbnail.id());
    assert_eq!(members[1].id(), ocr.id());
}

#[test]
fn members_saved_after_their_parent_get_identifiers() {
    let mut store = InMemoryEntityStore::new();
    let mut work = Entity::generic_work();
    let mut page = Entity::generic_file();

    add_generic_file_to_generic_work(&mut work, &page).unwrap();
    let work_id = store.save(&mut work).unwrap();
    assert!(work.members()[0].id().is_none());

    let page_id = store.save(&mut page).unwrap();
    let reloaded = store.find(&work_id).unwrap();
    assert_eq!(
        get_generic_files_from_generic_work(&reloaded)[0].id(),
        Some(&page_id)
    );
}

#[test]
fn book_in_a_collection_indexes_cleanly() {
    let mut store = InMemoryEntityStore::new();
    let file_type = characterization_type().unwrap();

    let mut page = Entity::generic_file();
    page.characterize(&file_type, "mime_type", "image/tiff").unwrap();
    page.characterize(&file_type, "height", "1200").unwrap();
    page.build_file()
        .with_name("page1.tif")
        .add_use("http://pcdm.org/use#PreservationMasterFile");
    PcdmUseValidator::validate_target(&page).unwrap();
    store.save(&mut page).unwrap();

    let mut book = Entity::generic_work();
    add_generic_file_to_generic_work(&mut book, &page).unwrap();
    store.save(&mut book).unwrap();

    let mut shelf = Entity::collection();
    add_generic_work_to_collection(&mut shelf, &book).unwrap();
    store.save(&mut shelf).unwrap();
    assert_eq!(get_generic_works_from_collection(&shelf), vec![MemberRef::from(&book)]);

    let page_doc = IndexDocument::project(&page);
    assert_eq!(page_doc.has_model_ssim, "Hydra::Works::GenericFile");
    assert_eq!(page_doc.files_ssim.len(), 1);
    assert!(page_doc.generic_files_ssim.is_empty());

    let book_doc = IndexDocument::project(&book);
    assert_eq!(book_doc.generic_files_ssim, vec![page.id().unwrap().to_string()]);

    let shelf_doc = IndexDocument::project(&shelf);
    assert_eq!(shelf_doc.generic_works_ssim, vec![book.id().unwrap().to_string()]);
    assert!(shelf_doc.collections_ssim.is_empty());
}
