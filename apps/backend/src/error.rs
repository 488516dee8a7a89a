//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lingolens_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDetections(_) | CoreError::InvalidSession(_) => {
                Self::Parse(err.to_string())
            }
            CoreError::ThresholdOutOfRange { .. } | CoreError::UnknownLanguage(_) => {
                Self::InvalidSettings(err.to_string())
            }
            CoreError::Speech(_) => Self::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Parse(_) => (StatusCode::BAD_REQUEST, "parse_error"),
            ApiError::InvalidSettings(_) => (StatusCode::BAD_REQUEST, "invalid_settings"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = ApiError::NotFound("quiz session".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("no items".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_detections_map_to_parse_error() {
        let error: ApiError = CoreError::InvalidDetections("not an array".to_string()).into();
        assert!(matches!(error, ApiError::Parse(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_session_maps_to_parse_error() {
        let error: ApiError = CoreError::InvalidSession("no questions".to_string()).into();
        assert_eq!(error.to_string(), "Parse error: invalid quiz session: no questions");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_threshold_maps_to_invalid_settings() {
        let error: ApiError = CoreError::ThresholdOutOfRange {
            value: 1.5,
            min: 0.2,
            max: 0.9,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid settings: confidence threshold 1.5 outside 0.2..=0.9"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ApiError::NotFound("Quiz abc".to_string());
        assert_eq!(error.to_string(), "Not found: Quiz abc");
    }
}
