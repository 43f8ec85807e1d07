//! Error types for the ability engine
//!
//! The resolution pipeline itself never fails. Errors only surface when
//! loading definitions, value maps or resolver configuration.

use thiserror::Error;

/// Ability engine errors
#[derive(Debug, Error)]
pub enum AbleError {
    /// Invalid resolver configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// JSON document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ability engine operations
pub type Result<T> = std::result::Result<T, AbleError>;
