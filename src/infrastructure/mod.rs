//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - EntityStore implementations
//! - `manifest` - TOML repository manifests
//! - `index` - Search index projection

pub mod index;
pub mod manifest;
pub mod repositories;

// Re-export for convenience
pub use index::IndexDocument;
pub use manifest::{Manifest, ManifestEntity, ManifestError, ManifestMember};
pub use repositories::InMemoryEntityStore;
