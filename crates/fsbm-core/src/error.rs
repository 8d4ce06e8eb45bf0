//! Error types for FSBM Trace.

use crate::frame::Plane;
use thiserror::Error;

/// Main error type for FSBM operations.
///
/// Every variant is fatal for a run: the pipeline never retries or
/// continues a partially processed frame.
#[derive(Error, Debug)]
pub enum FsbmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("Input exhausted while loading {plane}: expected {expected} bytes, got {got}")]
    InputExhausted {
        plane: Plane,
        expected: usize,
        got: usize,
    },

    #[error("Invalid plane identifier: {0}")]
    InvalidPlane(u8),

    #[error("Offset {offset} is outside {plane} (plane size {len})")]
    AddressOutOfRange {
        plane: Plane,
        offset: usize,
        len: usize,
    },
}

/// Result type alias for FSBM operations.
pub type Result<T> = std::result::Result<T, FsbmError>;
