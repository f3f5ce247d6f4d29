//! Error types for rowshred
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! An unsupported field type is deliberately *not* an error: the schema
//! registry drops such fields silently (and logs the drop), because not
//! every field is representable in a flat row.

use thiserror::Error;

/// The main error type for rowshred
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Mapping Errors
    // ============================================================================
    #[error("Mapping precheck failed: {message}")]
    Precheck { message: String },

    // ============================================================================
    // Record Errors
    // ============================================================================
    #[error("Malformed record at field '{field}': {message}")]
    MalformedRecord { field: String, message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    /// Create a precheck error
    pub fn precheck(message: impl Into<String>) -> Self {
        Self::Precheck {
            message: message.into(),
        }
    }

    /// Create a malformed record error
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if this error aborts a shred pass
    ///
    /// Record errors abort the whole pass; the partially built table must be
    /// discarded and the sink never invoked.
    pub fn aborts_shred(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }
}

/// Result type alias for rowshred
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::precheck("nothing shredded");
        assert_eq!(err.to_string(), "Mapping precheck failed: nothing shredded");

        let err = Error::malformed("Age", "accessor failed");
        assert_eq!(
            err.to_string(),
            "Malformed record at field 'Age': accessor failed"
        );

        let err = Error::output("bad batch");
        assert_eq!(err.to_string(), "Output error: bad batch");
    }

    #[test]
    fn test_aborts_shred() {
        assert!(Error::malformed("Id", "boom").aborts_shred());
        assert!(!Error::precheck("no columns").aborts_shred());
        assert!(!Error::output("x").aborts_shred());
    }
}
