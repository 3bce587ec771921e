//! # Store Error Types
//!
//! Error types for the flat-file store layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / read / write)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path for context              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller surfaces a user-visible failure                                 │
//! │                                                                         │
//! │  ParseError takes two routes depending on the store:                    │
//! │    stock line     → logged and skipped, never escapes getProducts       │
//! │    user line      → wrapped in StoreError::UserRecord, fatal to load    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use cas_core::ValidationError;
use thiserror::Error;

/// A single persisted record could not be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of comma-space-separated fields on the line.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field held text where a number was required.
    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// The device class was neither `keyboard` nor `mouse`.
    #[error("unknown device class '{0}'")]
    UnknownDeviceClass(String),

    /// The role was neither `admin` nor `customer`.
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    /// The fields parsed but failed domain validation, e.g. a five-digit
    /// bar code or a negative quantity.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A store-level operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File open, read, or write failure.
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A malformed user-account line. Unlike stock lines, this aborts
    /// the whole load.
    #[error("user accounts line {line}: {source}")]
    UserRecord {
        line: usize,
        #[source]
        source: ParseError,
    },
}

impl StoreError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
