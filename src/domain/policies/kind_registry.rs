//! Entity Kind Registry
//!
//! Pure classification of values into kinds and capabilities. Anything that
//! takes part in aggregation implements `PcdmNode`; values that are not
//! repository objects at all (plain strings) classify as `Kind::Opaque`.
//!
//! A type gains a behavior by declaring the capability, not by how it is
//! built: a wrapper around an `Entity` that reports `Capability::GenericFile`
//! is a generic file for every aggregation rule.

use crate::domain::entities::Entity;
use crate::domain::value_objects::{Capability, Kind};

/// A value that can be classified for aggregation
pub trait PcdmNode {
    /// Kind of this value
    fn kind(&self) -> Kind;

    /// Capabilities this value carries.
    ///
    /// Defaults to the kind's capability table.
    fn capabilities(&self) -> &'static [Capability] {
        self.kind().capabilities()
    }

    /// The entity holding this value's membership lists, if any
    fn entity(&self) -> Option<&Entity> {
        None
    }

    /// Mutable access to the entity holding this value's membership lists
    fn entity_mut(&mut self) -> Option<&mut Entity> {
        None
    }
}

impl PcdmNode for str {
    fn kind(&self) -> Kind {
        Kind::Opaque
    }
}

impl PcdmNode for String {
    fn kind(&self) -> Kind {
        Kind::Opaque
    }
}

/// Kind of any classifiable value
pub fn kind_of<N: PcdmNode + ?Sized>(node: &N) -> Kind {
    node.kind()
}

/// Whether `node` carries `capability`
pub fn has_capability<N: PcdmNode + ?Sized>(node: &N, capability: Capability) -> bool {
    node.capabilities().contains(&capability)
}

/// Whether `node` is a hydra-works generic file
pub fn is_generic_file<N: PcdmNode + ?Sized>(node: &N) -> bool {
    has_capability(node, Capability::GenericFile)
}

/// Whether `node` is a hydra-works generic work
pub fn is_generic_work<N: PcdmNode + ?Sized>(node: &N) -> bool {
    has_capability(node, Capability::GenericWork)
}

/// Whether `node` is a hydra-works collection
pub fn is_collection<N: PcdmNode + ?Sized>(node: &N) -> bool {
    has_capability(node, Capability::Collection)
}
