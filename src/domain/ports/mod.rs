//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entity_store;
pub mod use_vocabulary;

pub use entity_store::{EntityStore, StoreError};
pub use use_vocabulary::{PcdmUseVocabulary, StaticVocabulary, UseVocabulary};
