//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body could not be decoded as a vehicle
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No vehicle with the requested id
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store collaborator failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Anything else that went wrong while serving
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidBody("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::NotFound("1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_propagation() {
        let store_err = StoreError::io(
            "vehicles.json",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        let rest_err = RestError::from(store_err);

        assert_eq!(rest_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(rest_err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_response_body() {
        let err = RestError::NotFound("42".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "Vehicle not found: 42");
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::InvalidBody("oops".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
