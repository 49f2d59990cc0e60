//! Error types for the HTTP transport layer.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use taxprep_types::{ErrorKind, TaxprepError};

/// Errors that can occur while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}

/// A request failure rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed bearer credential (401).
    #[error("Unauthorized")]
    Unauthorized,
    /// Credential accepted but the resource is refused (403).
    #[error("{0}")]
    Forbidden(String),
    /// Unknown resource or route (404).
    #[error("{0}")]
    NotFound(String),
    /// Path exists but not for this method (405).
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Malformed request body or parameters (422).
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<TaxprepError> for ApiError {
    fn from(err: TaxprepError) -> Self {
        match err.kind {
            ErrorKind::Forbidden => Self::Forbidden(err.message),
            ErrorKind::NotFound => Self::NotFound(err.message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({"error": "Unauthorized"})),
            )
                .into_response(),
            Self::MethodNotAllowed => {
                (status, Json(json!({"error": "Method Not Allowed"}))).into_response()
            }
            Self::Forbidden(msg) | Self::NotFound(msg) | Self::Validation(msg) => {
                (status, Json(json!({"error": msg}))).into_response()
            }
        }
    }
}
