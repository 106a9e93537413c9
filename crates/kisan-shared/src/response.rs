//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
///
/// `message` is the human-readable text clients display; `title` is the
/// reason phrase of `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: u16,

    /// A short summary of the problem type.
    pub title: String,

    /// Explanation specific to this occurrence.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(413, "Payload Too Large", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, "Internal Server Error", message)
    }
}
