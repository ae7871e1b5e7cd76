//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod aggregation;
pub mod characterization;
mod use_validator;

pub use aggregation::{
    add_collection_to_collection, add_generic_file_to_generic_file,
    add_generic_file_to_generic_work, add_generic_work_to_collection,
    add_generic_work_to_generic_work, get_collections_from_collection,
    get_generic_files_from_generic_file, get_generic_files_from_generic_work,
    get_generic_works_from_collection, get_generic_works_from_generic_work, Relationship,
    Requirement,
};
pub use characterization::{apply_schema, EntityTypeBuilder, SchemaApplication};
pub use use_validator::{DeclaresUses, PcdmUseValidator};
