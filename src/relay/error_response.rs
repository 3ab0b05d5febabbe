//! Unified error response handling for the relay service
//!
//! Every failed relay attempt still produces exactly one HTTP response to
//! the caller: a structured JSON body with a stable error code and the
//! request ID for correlation.

use crate::relay::headers::X_REQUEST_ID;
use crate::relay::types::RelayError;
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlation
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    /// Add request ID for correlation
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Convert to HTTP response with proper headers
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        let request_id = self.request_id.clone();
        let mut response = (status, Json(self)).into_response();

        // Add request ID header if available
        if let Some(id) = request_id {
            if let Ok(header_value) = HeaderValue::from_str(&id) {
                response.headers_mut().insert(X_REQUEST_ID, header_value);
            }
        }

        response
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for RelayError {
    fn to_error_response(&self) -> ErrorResponse {
        use RelayError::*;

        match self {
            UpstreamConnection(msg) => {
                ErrorResponse::new("CONNECTION_ERROR", format!("Upstream connection error: {msg}"))
            }
            InvalidEndpoint(url) => {
                ErrorResponse::new("INTERNAL_ERROR", format!("Invalid upstream endpoint: {url}"))
            }
            Internal(msg) => ErrorResponse::new("INTERNAL_ERROR", msg.clone()),
        }
    }

    fn status_code(&self) -> StatusCode {
        use RelayError::*;

        match self {
            UpstreamConnection(_) => StatusCode::BAD_GATEWAY,
            InvalidEndpoint(_) | Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_creation() {
        let error = ErrorResponse::new("TEST_ERROR", "Test error message");
        assert_eq!(error.code, "TEST_ERROR");
        assert_eq!(error.message, "Test error message");
        assert!(error.request_id.is_none());
    }

    #[test]
    fn test_error_response_with_request_id() {
        let error = ErrorResponse::new("TEST_ERROR", "Test error").with_request_id("req-123");
        assert_eq!(error.request_id, Some("req-123".to_string()));
    }

    #[test]
    fn test_connection_error_maps_to_bad_gateway() {
        let error = RelayError::UpstreamConnection("connection refused".to_string());
        let response = error.to_error_response();
        assert_eq!(response.code, "CONNECTION_ERROR");
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let error = RelayError::Internal("boom".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_error_response().code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_into_response_carries_request_id_header() {
        let response = ErrorResponse::new("TEST_ERROR", "Test error")
            .with_request_id("req-123")
            .into_response_with_status(StatusCode::BAD_GATEWAY);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers().contains_key(X_REQUEST_ID));
    }
}
