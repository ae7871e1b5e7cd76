//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod identity;
mod kind;
mod pcdm_use;

pub use identity::{EntityId, EntityKey};
pub use kind::{Capability, Kind, Side};
pub use pcdm_use::{PcdmUse, PCDM_USE_NAMESPACE};
