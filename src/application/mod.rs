//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Load a manifest, apply memberships, validate uses, save
//! - `IndexUseCase` - Check a manifest and project the saved entities

pub mod check;
pub mod index;

pub use check::{CheckResult, CheckUseCase, CheckedEntity, Problem, ProblemKind};
pub use index::{IndexResult, IndexUseCase, NamedDocument};
