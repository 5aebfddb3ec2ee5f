//! Unified error types for the restaurant API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Process-level errors raised during startup and shutdown.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors. Every variant maps to an HTTP status and is
/// rendered as a JSON error body, so a failed request never surfaces a
/// bare framework response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No restaurant with the given id.
    #[error("restaurant {0} not found")]
    NotFound(Uuid),

    /// Path segment is not a valid restaurant id.
    #[error("invalid restaurant id: {0}")]
    InvalidId(String),

    /// Request payload failed validation.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// Request body could not be deserialized.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Request body exceeded the configured size limit.
    #[error("request body too large")]
    PayloadTooLarge,

    /// Request body had a content type we do not accept.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) | ApiError::Validation(_) | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::Validation(_) => "validation_failed",
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
        }
    }
}

/// JSON error envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error detail.
    pub error: ErrorDetail,
}

/// The error payload inside [`ErrorBody`].
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Per-field validation messages, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorBody {
    /// Build an error body from its parts.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                message: message.into(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            ApiError::Validation(errors) => Some(errors.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias for startup paths.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound(Uuid::nil());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn validation_maps_to_400_with_details() {
        let err = ApiError::Validation(vec!["name must not be empty".to_string()]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsupported_media_type_maps_to_415() {
        let err = ApiError::UnsupportedMediaType("text/plain".to_string());
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn payload_too_large_maps_to_413() {
        let err = ApiError::PayloadTooLarge;
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "payload_too_large");
    }

    #[test]
    fn app_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = AppError::from(io);
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }

    #[test]
    fn app_error_reports_invalid_config() {
        let err = AppError::InvalidConfig("PORT must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: PORT must be non-zero"
        );
    }
}
