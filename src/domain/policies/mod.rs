//! Domain Policies
//!
//! Business rules that govern behavior. These are pure functions that
//! operate on domain entities.

mod conflict_strategy;
mod kind_registry;

pub use conflict_strategy::{
    AlreadyThereStrategy, ConflictResolution, ConflictStrategy, StrategyKind, StrictStrategy,
};
pub use kind_registry::{
    has_capability, is_collection, is_generic_file, is_generic_work, kind_of, PcdmNode,
};
