//! Error types for RosterDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Data File Errors
    // -------------------------------------------------------------------------
    /// A numeric field in the data file failed to parse. Lines with the
    /// wrong field count are skipped instead and never produce this error.
    #[error("malformed numeric field in data file: {0}")]
    LineDecode(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("roster is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    #[error("no student with ID {0}")]
    NotFound(String),
}
