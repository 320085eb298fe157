use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Client-facing request errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not parseable JSON, has the wrong content type, or is too large
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String, status: StatusCode },

    /// Body is JSON but does not fit the request schema
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Well-typed body with values that fail validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson { .. } => "invalid_json",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Validation(_) => "validation_failed",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson { status, .. } => *status,
            ApiError::InvalidRequest(_) | ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

/// Handle JSON payload errors
///
/// Schema mismatches (missing or mistyped fields) become 422; syntax errors
/// and transport problems keep actix's own status.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    let api_error = match &err {
        error::JsonPayloadError::Deserialize(inner)
            if inner.classify() == serde_json::error::Category::Data =>
        {
            ApiError::InvalidRequest(inner.to_string())
        }
        _ => ApiError::InvalidJson {
            message: err.to_string(),
            status: err.status_code(),
        },
    };

    api_error.into()
}
