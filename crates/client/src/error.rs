//! Client error types

use ekos_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Whether the backend should be treated as unreachable: the request
    /// never got an answer, or the answer was a 5xx or 404.
    pub fn is_unavailable(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            ClientError::Status { status, .. } => *status >= 500 || *status == 404,
            _ => false,
        }
    }

    /// A 4xx other than 404, typically a validation failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if (400..500).contains(status) && *status != 404)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
