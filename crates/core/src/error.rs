//! Error types for the core domain

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Graph node not found: {0}")]
    NodeNotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
