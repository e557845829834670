//! Error types for the conformance harness
//!
//! These cover the harness itself. A sandbox property that does not hold is
//! never an error here: it is reported as a failed verdict.

use std::io;
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, ConformError>;

/// Errors that can occur while running or reporting the checks
#[derive(Error, Debug)]
pub enum ConformError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
