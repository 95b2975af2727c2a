//! Shared types for the employee directory
//!
//! Types used by both the server and the client: the employee model and
//! payloads, field validation, and the error system.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{DatabaseState, Employee, EmployeeCreate, EmployeeUpdate, HealthStatus};
pub use validation::ValidationErrors;
