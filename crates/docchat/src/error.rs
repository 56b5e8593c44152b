//! Error types for the docchat service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for docchat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Media type not recognized by any registered extractor
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Document content could not be decoded
    #[error("Failed to extract '{media_type}' content: {message}")]
    Extraction { media_type: String, message: String },

    /// Context store write failure
    #[error("Context write failed: {0}")]
    StorageWrite(#[source] std::io::Error),

    /// Context store read failure
    #[error("Context read failed: {0}")]
    StorageRead(#[source] std::io::Error),

    /// Completion service failure
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Malformed client request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an extraction error
    pub fn extraction(media_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            media_type: media_type.into(),
            message: message.into(),
        }
    }

    /// Create a completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::Extraction { .. } | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Completion(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Config(_)
            | Error::StorageWrite(_)
            | Error::StorageRead(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
