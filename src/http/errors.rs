//! HTTP error handling and conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::StoreError;

/// HTTP error types
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Validation errors
    BadRequest(String),

    /// Not found errors
    NotFound(String),

    /// Server errors
    Internal(String),
}

impl HttpError {
    /// Convert to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            HttpError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            HttpError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (HttpError::BadRequest(message)
        | HttpError::NotFound(message)
        | HttpError::Internal(message)) = self;

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convert store errors to HTTP errors
impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(_) => {
                HttpError::BadRequest("Missing or invalid data".to_string())
            }
            StoreError::NotFound => HttpError::NotFound("Save file not found".to_string()),
            StoreError::Io(e) => HttpError::Internal(e.to_string()),
            StoreError::Startup(msg) => HttpError::Internal(msg),
        }
    }
}

/// Result type alias for HTTP operations
pub type HttpResult<T> = Result<T, HttpError>;
