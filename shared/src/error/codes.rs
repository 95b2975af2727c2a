//! Error codes for the employee directory
//!
//! Error codes are organized by category:
//! - 0xxx: Request errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 so server logs and client errors agree on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// A payload field failed validation
    ValidationFailed = 1,
    /// Body is not acceptable JSON for the endpoint
    InvalidRequest = 2,
    /// Path identifier is not a positive integer
    InvalidId = 3,
    /// Update payload has no recognized field
    EmptyUpdate = 4,

    // ==================== 8xxx: Employee ====================
    EmployeeNotFound = 8001,
    /// Email address already used by another employee
    EmployeeEmailExists = 8002,

    // ==================== 9xxx: System ====================
    /// Storage or invariant failure; details stay in the server log
    InternalError = 9001,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidId => "Invalid ID",
            Self::EmptyUpdate => "Specify at least one field to update",
            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeEmailExists => "This email address is already in use",
            Self::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ValidationFailed),
            2 => Ok(Self::InvalidRequest),
            3 => Ok(Self::InvalidId),
            4 => Ok(Self::EmptyUpdate),
            8001 => Ok(Self::EmployeeNotFound),
            8002 => Ok(Self::EmployeeEmailExists),
            9001 => Ok(Self::InternalError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(8001), Ok(ErrorCode::EmployeeNotFound));
        assert_eq!(ErrorCode::try_from(4), Ok(ErrorCode::EmptyUpdate));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(9002), Err(InvalidErrorCode(9002)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::EmployeeEmailExists).unwrap();
        assert_eq!(json, "8002");

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::InvalidId.to_string(), "E0003");
        assert_eq!(ErrorCode::InternalError.to_string(), "E9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::InvalidId.message(), "Invalid ID");
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
    }
}
