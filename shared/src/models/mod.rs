//! Data models
//!
//! Shared between directory-server and directory-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod employee;
pub mod health;

// Re-exports
pub use employee::*;
pub use health::*;
