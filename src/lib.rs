//! pcdm-works - aggregation validation for PCDM works
//!
//! Decides which kinds of repository object may aggregate which others
//! (generic files, generic works, collections), validates the PCDM use
//! vocabulary declared on content files, and composes characterization
//! schemas onto the generic-file type.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{ContentFile, Entity, EntityType, MemberRef, PropertyDefinition, Schema};
pub use domain::policies::{has_capability, kind_of, PcdmNode};
pub use domain::services::{
    add_generic_file_to_generic_file, get_generic_files_from_generic_file, PcdmUseValidator,
    Relationship,
};
pub use domain::value_objects::{Capability, EntityId, Kind};
pub use error::{WorksError, WorksResult};
