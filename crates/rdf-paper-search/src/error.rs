//! Error types for the paper search server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ErrorBody;

/// Errors from the SPARQL client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the endpoint.
    #[error("SPARQL error {status}: {message}")]
    Endpoint {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        message: String,
    },

    /// Malformed results document
    #[error("Failed to parse SPARQL results: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an endpoint error, keeping at most `limit` characters of the body.
    #[must_use]
    pub fn endpoint(status: u16, body: &str, limit: usize) -> Self {
        Self::Endpoint { status, message: body.chars().take(limit).collect() }
    }

    /// HTTP status reported by the endpoint, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Endpoint { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Input validation failed
    #[error("{0}")]
    Validation(String),

    /// The requested paper does not exist
    #[error("{0}")]
    NotFound(String),

    /// The graph endpoint failed
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl ApiError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;
