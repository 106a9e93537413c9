//! Error handling middleware - maps failures to `{message}` JSON bodies.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use kisan_core::error::{DomainError, RepoError};
use kisan_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PayloadTooLarge(String),
    /// Storage failure. Only `message` reaches the client.
    Storage {
        message: &'static str,
        source: RepoError,
    },
}

impl AppError {
    pub fn storage(message: &'static str, source: RepoError) -> Self {
        AppError::Storage { message, source }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::Storage { message, source } => write!(f, "{}: {}", message, source),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(message) => ErrorResponse::bad_request(message),
            AppError::PayloadTooLarge(message) => ErrorResponse::payload_too_large(message),
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                ErrorResponse::internal_error(*message)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Error handler for `web::JsonConfig`, so malformed bodies get the same
/// error shape as every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected JSON request body");

    let app_error = match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            AppError::PayloadTooLarge("Request body is too large".to_string())
        }
        _ => AppError::BadRequest("Invalid request body".to_string()),
    };

    app_error.into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
