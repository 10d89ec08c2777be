//! Error types for the Tapsilat client

use thiserror::Error;

/// Result type alias for Tapsilat operations
pub type Result<T> = std::result::Result<T, TapsilatError>;

/// HTTP status carried by every validation failure
pub const VALIDATION_STATUS_CODE: u16 = 400;

/// Input rejected by one of the request validators.
///
/// The `code` field is reserved for telling validation failures apart and is
/// currently always `0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Tapsilat Validation Error\nstatus_code:{status_code}\ncode:{code}\nerror:{message}")]
pub struct ValidationError {
    /// HTTP-style status code (always 400)
    pub status_code: u16,
    /// Sub-code, always 0
    pub code: i32,
    /// Human-readable description of the failure
    pub message: String,
}

impl ValidationError {
    /// Create a validation error with the default status and code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status_code: VALIDATION_STATUS_CODE,
            code: 0,
            message: message.into(),
        }
    }
}

/// Main error type for Tapsilat operations
#[derive(Error, Debug)]
pub enum TapsilatError {
    /// Request input failed validation before it was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TapsilatError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an API status error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status associated with this error, when there is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation(err) => Some(err.status_code),
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
