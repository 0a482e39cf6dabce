use axum::{
    http::{header::ALLOW, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Request failures, rendered as `{ "error", "details" }`
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown document name or missing object
    #[error("Not found")]
    NotFound(String),

    /// Request body is not JSON
    #[error("Malformed payload")]
    MalformedPayload(String),

    /// Method other than GET on a read-only document
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    /// Store or runtime failure
    #[error("Failed to process request")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> String {
        match self {
            ApiError::NotFound(d) | ApiError::MalformedPayload(d) | ApiError::Internal(d) => {
                d.clone()
            }
            ApiError::MethodNotAllowed(_) => "allowed: GET".to_string(),
        }
    }
}

impl From<tripdeck_core::Error> for ApiError {
    fn from(e: tripdeck_core::Error) -> Self {
        if e.is_not_found() {
            ApiError::NotFound(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self.details(), "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        let mut response = (status, Json(body)).into_response();
        if let ApiError::MethodNotAllowed(_) = self {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET"));
        }
        response
    }
}
