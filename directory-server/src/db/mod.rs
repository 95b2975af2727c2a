//! Database access layer
//!
//! [`EmployeeRepository`] is the seam between the route layer and storage.
//! Absence is modelled as `None`/`false`, never as an error; only storage
//! failures and broken invariants surface as [`RepoError`].

pub mod employees;
pub mod memory;

pub use employees::PgEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    /// The write collided with the unique email constraint
    #[error("email address already in use")]
    EmailTaken,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Storage returned something that contradicts a completed write
    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees, newest first
    async fn list(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Number of employees using `email`, ignoring `exclude_id`
    async fn count_by_email(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<i64>;

    /// Insert and return the fully populated record
    async fn create(&self, data: &EmployeeCreate) -> RepoResult<Employee>;

    /// Write only the present fields; `None` when the id does not exist
    async fn update(&self, id: i64, data: &EmployeeUpdate) -> RepoResult<Option<Employee>>;

    /// `true` when a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Whether storage is reachable
    async fn ping(&self) -> bool;
}
