//! directory-server: employee directory REST API
//!
//! - `GET /health`: liveness plus database reachability
//! - `GET|POST /employees`, `GET|PUT|DELETE /employees/{id}`: employee CRUD
//!
//! Storage sits behind [`db::EmployeeRepository`], with a PostgreSQL and an
//! in-memory implementation.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod state;

pub use api::build_app;
pub use config::{Config, StorageBackend};
pub use state::AppState;
