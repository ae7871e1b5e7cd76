//! Domain Layer
//!
//! The core of pcdm-works: aggregation rules, use validation and
//! characterization, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Entities, content files, schemas and entity types
//! - `value_objects/` - Kinds, capabilities, identifiers, PCDM use terms
//! - `services/` - Aggregation, use validation, schema application
//! - `policies/` - Kind registry and schema conflict strategies
//! - `ports/` - Store and vocabulary interfaces for infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
