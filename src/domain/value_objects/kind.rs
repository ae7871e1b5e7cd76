//! Kind value object - the closed set of repository object kinds
//!
//! A kind is fixed when an entity is constructed. Capabilities are derived
//! from the kind through a static table, never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a repository object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// hydra-works collection
    Collection,
    /// hydra-works generic work
    GenericWork,
    /// hydra-works generic file
    GenericFile,
    /// Plain PCDM collection
    #[serde(rename = "pcdm_collection")]
    PcdmCollection,
    /// Plain PCDM object
    #[serde(rename = "pcdm_object")]
    PcdmObject,
    /// PCDM file (raw content, not an aggregation)
    #[serde(rename = "pcdm_file")]
    PcdmFile,
    /// Anything not recognized, including non-repository values
    #[default]
    Opaque,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Collection,
        Kind::GenericWork,
        Kind::GenericFile,
        Kind::PcdmCollection,
        Kind::PcdmObject,
        Kind::PcdmFile,
        Kind::Opaque,
    ];

    /// Capabilities carried by this kind
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Kind::Collection => &[Capability::Collection, Capability::PcdmCollection],
            Kind::GenericWork => &[Capability::GenericWork, Capability::PcdmObject],
            Kind::GenericFile => &[Capability::GenericFile, Capability::PcdmObject],
            Kind::PcdmCollection => &[Capability::PcdmCollection],
            Kind::PcdmObject => &[Capability::PcdmObject],
            Kind::PcdmFile => &[Capability::PcdmFile],
            Kind::Opaque => &[],
        }
    }

    /// Snake-case name used in manifests and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Collection => "collection",
            Kind::GenericWork => "generic_work",
            Kind::GenericFile => "generic_file",
            Kind::PcdmCollection => "pcdm_collection",
            Kind::PcdmObject => "pcdm_object",
            Kind::PcdmFile => "pcdm_file",
            Kind::Opaque => "opaque",
        }
    }

    /// Model name as written to index documents
    pub fn model_name(&self) -> &'static str {
        match self {
            Kind::Collection => "Hydra::Works::Collection",
            Kind::GenericWork => "Hydra::Works::GenericWork",
            Kind::GenericFile => "Hydra::Works::GenericFile",
            Kind::PcdmCollection => "Hydra::PCDM::Collection",
            Kind::PcdmObject => "Hydra::PCDM::Object",
            Kind::PcdmFile => "Hydra::PCDM::File",
            Kind::Opaque => "ActiveFedora::Base",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("unknown kind '{}'", s))
    }
}

/// A behavior an entity may carry.
///
/// Aggregation rules are written against capabilities, not kinds, so a type
/// that opts in to a behavior qualifies regardless of how it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    GenericFile,
    GenericWork,
    Collection,
    PcdmObject,
    PcdmCollection,
    PcdmFile,
}

impl Capability {
    /// Human-readable noun used in error messages
    pub fn noun(&self) -> &'static str {
        match self {
            Capability::GenericFile => "generic file",
            Capability::GenericWork => "generic work",
            Capability::Collection => "collection",
            Capability::PcdmObject => "pcdm object",
            Capability::PcdmCollection => "pcdm collection",
            Capability::PcdmFile => "pcdm file",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Side of an aggregation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Parent,
    Child,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Parent => write!(f, "parent"),
            Side::Child => write!(f, "child"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_default_is_opaque() {
        assert_eq!(Kind::default(), Kind::Opaque);
    }

    #[test]
    fn only_generic_file_kind_has_generic_file_capability() {
        let with: Vec<Kind> = Kind::ALL
            .into_iter()
            .filter(|k| k.capabilities().contains(&Capability::GenericFile))
            .collect();
        assert_eq!(with, vec![Kind::GenericFile]);
    }

    #[test]
    fn opaque_has_no_capabilities() {
        assert!(Kind::Opaque.capabilities().is_empty());
    }

    #[test]
    fn works_kinds_are_also_pcdm_kinds() {
        assert!(Kind::GenericWork
            .capabilities()
            .contains(&Capability::PcdmObject));
        assert!(Kind::Collection
            .capabilities()
            .contains(&Capability::PcdmCollection));
        assert!(!Kind::PcdmObject
            .capabilities()
            .contains(&Capability::GenericWork));
    }

    #[test]
    fn kind_round_trips_through_name() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("Generic-File".parse::<Kind>(), Ok(Kind::GenericFile));
        assert!("bogus".parse::<Kind>().is_err());
    }

    #[test]
    fn kind_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Doc {
            kind: Kind,
        }
        let doc: Doc = toml::from_str("kind = \"pcdm_object\"").unwrap();
        assert_eq!(doc.kind, Kind::PcdmObject);
    }
}
