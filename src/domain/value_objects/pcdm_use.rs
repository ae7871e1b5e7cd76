//! PCDM Use terms
//!
//! Terms from the PCDM Use extension ontology (`http://pcdm.org/use#`).
//! These form the default controlled vocabulary for file uses.

use std::fmt;

/// Namespace of the PCDM Use ontology
pub const PCDM_USE_NAMESPACE: &str = "http://pcdm.org/use#";

/// A term of the PCDM Use ontology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcdmUse {
    OriginalFile,
    ThumbnailImage,
    ExtractedText,
    IntermediateFile,
    PreservationMasterFile,
    ServiceFile,
    Transcript,
}

impl PcdmUse {
    pub const ALL: [PcdmUse; 7] = [
        PcdmUse::OriginalFile,
        PcdmUse::ThumbnailImage,
        PcdmUse::ExtractedText,
        PcdmUse::IntermediateFile,
        PcdmUse::PreservationMasterFile,
        PcdmUse::ServiceFile,
        PcdmUse::Transcript,
    ];

    /// Local name within the ontology
    pub fn local_name(&self) -> &'static str {
        match self {
            PcdmUse::OriginalFile => "OriginalFile",
            PcdmUse::ThumbnailImage => "ThumbnailImage",
            PcdmUse::ExtractedText => "ExtractedText",
            PcdmUse::IntermediateFile => "IntermediateFile",
            PcdmUse::PreservationMasterFile => "PreservationMasterFile",
            PcdmUse::ServiceFile => "ServiceFile",
            PcdmUse::Transcript => "Transcript",
        }
    }

    /// Full term URI
    pub fn uri(&self) -> String {
        format!("{}{}", PCDM_USE_NAMESPACE, self.local_name())
    }

    /// Resolve a term from its full URI
    pub fn from_uri(uri: &str) -> Option<Self> {
        let local = uri.strip_prefix(PCDM_USE_NAMESPACE)?;
        Self::ALL.into_iter().find(|u| u.local_name() == local)
    }
}

impl fmt::Display for PcdmUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PCDM_USE_NAMESPACE, self.local_name())
    }
}
