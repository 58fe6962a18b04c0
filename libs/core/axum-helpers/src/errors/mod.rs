pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{BytesRejection, FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::FieldViolation;

/// Error body shared by every failure except rule violations.
///
/// ```json
/// { "error": "Product Not Found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Body returned when one or more field rules are violated.
///
/// ```json
/// { "errors": [{ "name": "Should be at least 2 Characters" }] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// One single-entry object per violated rule, in rule order
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<FieldViolation>,
}

/// Application error type converted to HTTP responses.
///
/// This is the one place that decides status code and body shape for a
/// failure. Domain errors convert into it with `From`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body could not be decoded
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Body extraction rejected by axum; keeps the rejection's own status
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation failed: {} violation(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    /// No route matched; carries the requested URL
    #[error("Route not matched: {0}")]
    RouteNotMatched(String),

    #[error("Internal Server Error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) | AppError::Rejected { .. } => ErrorCode::InvalidBody,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            AppError::RouteNotMatched(_) => ErrorCode::RouteNotMatched,
            AppError::Unexpected(_) => ErrorCode::Unexpected,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::NotFound(_) | AppError::RouteNotMatched(_) => StatusCode::NOT_FOUND,
            AppError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Message used for requests that match no route
pub fn route_not_matched_message(url: &str) -> String {
    format!("The URL you requested: {url} is NOT found on Server!")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = self.status();

        if code.is_server_error() {
            tracing::error!(error_code = code.code(), "{}", self);
        } else {
            tracing::info!(error_code = code.code(), "{}", self);
        }

        match self {
            AppError::ValidationFailed(errors) => {
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            AppError::BadRequest(message)
            | AppError::Rejected { message, .. }
            | AppError::NotFound(message)
            | AppError::Unexpected(message) => {
                (status, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::RouteNotMatched(url) => (
                status,
                Json(ErrorResponse {
                    error: route_not_matched_message(&url),
                }),
            )
                .into_response(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
