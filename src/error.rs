//! Custom error types for sbudget
//!
//! Every failure raised while loading configuration or persisting budget
//! classes is one of these variants. Schema failures always carry the
//! location of the offending field so a bad config file can be fixed
//! without reading the validator.

use thiserror::Error;

/// The main error type for sbudget operations
#[derive(Error, Debug)]
pub enum SbError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// File content is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required field is missing or has the wrong type
    #[error("Schema error at '{location}': {reason}")]
    Schema { location: String, reason: String },

    /// A class type that is neither "income" nor "expense"
    #[error("Schema error at '{location}': class type must be \"income\" or \"expense\", got '{value}'")]
    InvalidClassType { location: String, value: String },

    /// Two entities resolve to the same identity
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The save location exists but is not a directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SbError {
    /// Create a schema error for a field that is absent
    pub fn missing_field(location: impl Into<String>, expected: &str) -> Self {
        Self::Schema {
            location: location.into(),
            reason: format!("missing required {} field", expected),
        }
    }

    /// Create a schema error for a field holding the wrong JSON type
    pub fn wrong_type(location: impl Into<String>, expected: &str, found: &str) -> Self {
        Self::Schema {
            location: location.into(),
            reason: format!("expected {}, found {}", expected, found),
        }
    }

    /// Check if this error came from schema validation
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Self::Schema { .. } | Self::InvalidClassType { .. } | Self::Duplicate { .. }
        )
    }

    /// Check if this is an invalid save location error
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath(_))
    }

    /// The field location for schema errors, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Schema { location, .. } | Self::InvalidClassType { location, .. } => {
                Some(location.as_str())
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for SbError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for sbudget operations
pub type SbResult<T> = Result<T, SbError>;
