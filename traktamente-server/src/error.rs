//! Error types for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use traktamente_core::{LookupError, LookupErrorKind};

/// API error type
///
/// Every variant is reported as a plain-text body; successful responses are
/// always JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Not found (404)
    NotFound(String),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to the client
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err.kind() {
            LookupErrorKind::BadRequest => ApiError::BadRequest(err.to_string()),
            LookupErrorKind::NotFound => ApiError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
        };
        (status, body).into_response()
    }
}
