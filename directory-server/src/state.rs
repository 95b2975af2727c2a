//! Application state

use std::sync::Arc;

use crate::db::{EmployeeRepository, MemoryEmployeeRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Employee storage
    pub employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(employees: impl EmployeeRepository + 'static) -> Self {
        Self {
            employees: Arc::new(employees),
        }
    }

    /// State backed by process memory (development and tests)
    pub fn in_memory() -> Self {
        Self::new(MemoryEmployeeRepository::new())
    }
}
