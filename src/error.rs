//! Error types for the contact book core.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain validation errors live separately in [`crate::domain::errors`].

use thiserror::Error;

/// Error for `get`/`delete` on a position the store does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("index {index} is out of bounds for a store of {len} contact(s)")]
pub struct IndexError {
    /// The requested position
    pub index: usize,

    /// Number of contacts held when the access was attempted
    pub len: usize,
}

/// Errors that can occur while decoding a persisted contact file.
///
/// `ContactStore::load` recovers from all of these by resetting to an empty
/// store; they surface only through [`crate::codec::decode`] directly.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input is not a structurally valid contact file (truncated, empty,
    /// not JSON, or records failing field validation)
    #[error("Malformed contact data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file declares a format version this build does not understand
    #[error("Unsupported contact file version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors that can occur while saving the store to disk.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Writing the file failed (disk full, permission denied, bad path)
    #[error("Failed to write contact file: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the contact sequence failed
    #[error("Failed to encode contact data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DecodeError
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
