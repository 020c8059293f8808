//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for quiesce operations
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum QuiesceError {
    /// Strategy-required fields are missing. Failures are accumulated and
    /// reported together, never one at a time.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The externally supplied cancellation signal fired before the
    /// operation completed. No local state has been mutated.
    #[error("Operation cancelled")]
    Cancelled,
}

/// Result type alias for quiesce operations
pub type Result<T> = std::result::Result<T, QuiesceError>;
