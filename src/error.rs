use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;

/// Error type for relay operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("X-Netlify-Event header is not deploy_created")]
    UnsupportedEvent,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("Failed to forward notification: {0}")]
    Forward(String),

    #[error("Failed to encode notification card: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RelayError {
    /// Status code surfaced to the webhook caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UnsupportedEvent => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RelayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::Forward(_) => StatusCode::BAD_GATEWAY,
            RelayError::Encode(_) | RelayError::Config(_) | RelayError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Helper type for Results that use RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
