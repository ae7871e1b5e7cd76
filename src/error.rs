//! Error types for pcdm-works
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Side;

/// Result type alias for pcdm-works operations
pub type WorksResult<T> = Result<T, WorksError>;

/// Main error type for pcdm-works operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorksError {
    /// A parent or child lacks the capability an aggregation requires.
    ///
    /// The message is part of the public contract and must stay stable.
    #[error("{label} must be a hydra-works {noun}")]
    InvalidArgumentKind {
        side: Side,
        label: &'static str,
        noun: &'static str,
    },

    /// A declared use is not part of the allowed vocabulary
    #[error("invalid PCDM use: {}", .values.join(", "))]
    InvalidPcdmUse { values: Vec<String> },

    /// A schema defines a property the target type already has
    #[error("schema '{schema}' redefines property '{property}' on {target}")]
    SchemaConflict {
        schema: String,
        property: String,
        target: String,
    },

    /// A characterization value names a property the type does not define
    #[error("unknown property '{property}' for {target}")]
    UnknownProperty { property: String, target: String },

    /// No built-in characterization schema has this name
    #[error("unknown characterization schema '{name}'")]
    UnknownSchema { name: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl WorksError {
    /// Which side of an aggregation was rejected, if this is a kind error
    pub fn side(&self) -> Option<Side> {
        match self {
            WorksError::InvalidArgumentKind { side, .. } => Some(*side),
            _ => None,
        }
    }
}
