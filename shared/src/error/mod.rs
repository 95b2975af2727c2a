//! Unified error system for the employee directory
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Tagged error with code, message and optional field
//! - [`ErrorBody`]: The `{error, field?}` JSON body sent to clients
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::EmployeeNotFound);
//! assert_eq!(err.http_status(), shared::http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::email_taken();
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.field.as_deref(), Some("email"));
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
