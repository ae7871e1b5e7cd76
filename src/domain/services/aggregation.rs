//! Aggregation relationship service
//!
//! Validates parent/child capabilities and appends membership edges.
//!
//! Every relationship follows the same algorithm:
//! 1. the parent must carry the relationship's parent capability
//! 2. the child must carry the relationship's child capability
//! 3. only then is the child appended to the parent's member list
//!
//! The parent is always checked first, so when both sides are invalid the
//! parent error wins. Nothing is mutated on failure and nothing is
//! persisted on success. Duplicate members are kept in insertion order.

use std::fmt;

use tracing::debug;

use crate::domain::entities::MemberRef;
use crate::domain::policies::{has_capability, PcdmNode};
use crate::domain::value_objects::{Capability, Kind, Side};
use crate::error::{WorksError, WorksResult};

/// One side of a relationship: the required capability and the argument
/// label used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub capability: Capability,
    pub label: &'static str,
}

impl Requirement {
    const fn new(capability: Capability, label: &'static str) -> Self {
        Self { capability, label }
    }

    fn check<N: PcdmNode + ?Sized>(&self, node: &N, side: Side) -> WorksResult<()> {
        if has_capability(node, self.capability) && node.entity().is_some() {
            Ok(())
        } else {
            Err(self.error(side))
        }
    }

    fn error(&self, side: Side) -> WorksError {
        WorksError::InvalidArgumentKind {
            side,
            label: self.label,
            noun: self.capability.noun(),
        }
    }
}

/// The fixed set of aggregation relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    GenericFileToGenericFile,
    GenericFileToGenericWork,
    GenericWorkToGenericWork,
    GenericWorkToCollection,
    CollectionToCollection,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::GenericFileToGenericFile,
        Relationship::GenericFileToGenericWork,
        Relationship::GenericWorkToGenericWork,
        Relationship::GenericWorkToCollection,
        Relationship::CollectionToCollection,
    ];

    /// Requirement on the aggregating side
    pub fn parent(&self) -> Requirement {
        match self {
            Relationship::GenericFileToGenericFile => {
                Requirement::new(Capability::GenericFile, "parent_generic_file")
            }
            Relationship::GenericFileToGenericWork => {
                Requirement::new(Capability::GenericWork, "generic_work")
            }
            Relationship::GenericWorkToGenericWork => {
                Requirement::new(Capability::GenericWork, "parent_generic_work")
            }
            Relationship::GenericWorkToCollection => {
                Requirement::new(Capability::Collection, "collection")
            }
            Relationship::CollectionToCollection => {
                Requirement::new(Capability::Collection, "parent_collection")
            }
        }
    }

    /// Requirement on the member side
    pub fn child(&self) -> Requirement {
        match self {
            Relationship::GenericFileToGenericFile => {
                Requirement::new(Capability::GenericFile, "child_generic_file")
            }
            Relationship::GenericFileToGenericWork => {
                Requirement::new(Capability::GenericFile, "generic_file")
            }
            Relationship::GenericWorkToGenericWork => {
                Requirement::new(Capability::GenericWork, "child_generic_work")
            }
            Relationship::GenericWorkToCollection => {
                Requirement::new(Capability::GenericWork, "generic_work")
            }
            Relationship::CollectionToCollection => {
                Requirement::new(Capability::Collection, "child_collection")
            }
        }
    }

    /// Snake-case name used in manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::GenericFileToGenericFile => "generic_file_to_generic_file",
            Relationship::GenericFileToGenericWork => "generic_file_to_generic_work",
            Relationship::GenericWorkToGenericWork => "generic_work_to_generic_work",
            Relationship::GenericWorkToCollection => "generic_work_to_collection",
            Relationship::CollectionToCollection => "collection_to_collection",
        }
    }

    /// Parse a manifest name
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|r| r.as_str() == normalized)
    }

    /// The relationship whose requirements both kinds satisfy
    pub fn infer(parent: Kind, child: Kind) -> Option<Self> {
        Self::ALL.into_iter().find(|r| {
            parent.capabilities().contains(&r.parent().capability)
                && child.capabilities().contains(&r.child().capability)
        })
    }

    /// Validate both sides and append `child` to `parent`'s members
    pub fn add<P, C>(&self, parent: &mut P, child: &C) -> WorksResult<()>
    where
        P: PcdmNode + ?Sized,
        C: PcdmNode + ?Sized,
    {
        let (parent_req, child_req) = (self.parent(), self.child());
        parent_req.check(&*parent, Side::Parent)?;
        child_req.check(child, Side::Child)?;

        let member = MemberRef::from(child);
        let entity = parent
            .entity_mut()
            .ok_or_else(|| parent_req.error(Side::Parent))?;

        debug!(
            relationship = %self,
            parent = %entity.key(),
            child = %member.key(),
            "appending member"
        );
        entity.push_member(member);
        Ok(())
    }

    /// Members of `parent` that this relationship aggregates, in insertion
    /// order with duplicates. Content files are never included.
    pub fn members<P: PcdmNode + ?Sized>(&self, parent: &P) -> Vec<MemberRef> {
        parent
            .entity()
            .map(|e| e.members_with(self.child().capability))
            .unwrap_or_default()
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate a generic file inside another generic file
pub fn add_generic_file_to_generic_file<P, C>(parent: &mut P, child: &C) -> WorksResult<()>
where
    P: PcdmNode + ?Sized,
    C: PcdmNode + ?Sized,
{
    Relationship::GenericFileToGenericFile.add(parent, child)
}

/// Generic files aggregated by a generic file
pub fn get_generic_files_from_generic_file<P: PcdmNode + ?Sized>(parent: &P) -> Vec<MemberRef> {
    Relationship::GenericFileToGenericFile.members(parent)
}

/// Aggregate a generic file inside a generic work
pub fn add_generic_file_to_generic_work<P, C>(work: &mut P, file: &C) -> WorksResult<()>
where
    P: PcdmNode + ?Sized,
    C: PcdmNode + ?Sized,
{
    Relationship::GenericFileToGenericWork.add(work, file)
}

/// Generic files aggregated by a generic work
pub fn get_generic_files_from_generic_work<P: PcdmNode + ?Sized>(work: &P) -> Vec<MemberRef> {
    Relationship::GenericFileToGenericWork.members(work)
}

/// Aggregate a generic work inside another generic work
pub fn add_generic_work_to_generic_work<P, C>(parent: &mut P, child: &C) -> WorksResult<()>
where
    P: PcdmNode + ?Sized,
    C: PcdmNode + ?Sized,
{
    Relationship::GenericWorkToGenericWork.add(parent, child)
}

/// Generic works aggregated by a generic work
pub fn get_generic_works_from_generic_work<P: PcdmNode + ?Sized>(parent: &P) -> Vec<MemberRef> {
    Relationship::GenericWorkToGenericWork.members(parent)
}

/// Aggregate a generic work inside a collection
pub fn add_generic_work_to_collection<P, C>(collection: &mut P, work: &C) -> WorksResult<()>
where
    P: PcdmNode + ?Sized,
    C: PcdmNode + ?Sized,
{
    Relationship::GenericWorkToCollection.add(collection, work)
}

/// Generic works aggregated by a collection
pub fn get_generic_works_from_collection<P: PcdmNode + ?Sized>(collection: &P) -> Vec<MemberRef> {
    Relationship::GenericWorkToCollection.members(collection)
}

/// Aggregate a collection inside another collection
pub fn add_collection_to_collection<P, C>(parent: &mut P, child: &C) -> WorksResult<()>
where
    P: PcdmNode + ?Sized,
    C: PcdmNode + ?Sized,
{
    Relationship::CollectionToCollection.add(parent, child)
}

/// Collections aggregated by a collection
pub fn get_collections_from_collection<P: PcdmNode + ?Sized>(parent: &P) -> Vec<MemberRef> {
    Relationship::CollectionToCollection.members(parent)
}
