//! Directory Client - typed client and UI state for the employee API
//!
//! Layers, bottom up: an [`HttpClient`] transport, the typed
//! [`EmployeeApi`], the [`EmployeeStore`] state container, and the form and
//! view models built on top of it.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod store;
pub mod view;

pub use api::EmployeeApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use forms::{CreateEmployeeForm, DeleteDialog, EditEmployeeForm, EmployeeField};
pub use store::{EmployeeStore, StoreState};
pub use view::{EmployeeDetail, EmployeeListView, EmployeeRow};

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, HealthStatus};
