//! Error types for the drag-and-drop board engine
//!
//! Board operations themselves are total: a stale or unknown id is a no-op,
//! never an error. Errors only surface from integrity checks and from
//! configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, DndError>;

/// Errors that can occur in the board engine
#[derive(Debug, Error)]
pub enum DndError {
    /// An item references a group that is not on the board
    #[error("item {item} references missing group {group}")]
    DanglingItem { item: String, group: String },

    /// Duplicate ID within one entity kind
    #[error("duplicate {kind} ID: {id}")]
    DuplicateId { kind: String, id: String },

    /// Configuration file given explicitly but not present
    #[error("configuration file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// Configuration file extension is not toml, yaml, yml or json
    #[error("unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration could not be merged or extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl DndError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Check if this error reports a broken board invariant
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::DanglingItem { .. } | Self::DuplicateId { .. })
    }
}

impl From<figment::Error> for DndError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}
