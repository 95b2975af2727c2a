//! Error type and the JSON error body

use super::codes::ErrorCode;
use crate::validation::ValidationErrors;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured code and an optional offending field
///
/// This is the tagged `{kind, message, field?}` error the route layer turns
/// into a response. `field` is only set for errors attributable to a single
/// payload field (schema violations, duplicate email).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the kind of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Payload field the error refers to, if any
    pub field: Option<String>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            field: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg).with_field(field)
    }

    /// Create an invalid request error (malformed body, unknown keys)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an invalid path id error
    pub fn invalid_id() -> Self {
        Self::new(ErrorCode::InvalidId)
    }

    /// Create an "update has no fields" error
    pub fn empty_update() -> Self {
        Self::new(ErrorCode::EmptyUpdate)
    }

    /// Create an employee not found error
    pub fn employee_not_found() -> Self {
        Self::new(ErrorCode::EmployeeNotFound)
    }

    /// Create a duplicate email error, pointing at the `email` field
    pub fn email_taken() -> Self {
        Self::new(ErrorCode::EmployeeEmailExists).with_field("email")
    }

    /// Create an internal error with a fixed, caller-safe message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<ValidationErrors> for AppError {
    /// Report the first failing field, in declaration order
    fn from(errors: ValidationErrors) -> Self {
        match errors.first() {
            Some((field, message)) => Self::validation(field, message),
            None => Self::new(ErrorCode::ValidationFailed),
        }
    }
}

/// JSON body of every error response: `{"error": "...", "field": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
            field: err.field.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        (self.http_status(), Json(ErrorBody::from(&self))).into_response()
    }
}
