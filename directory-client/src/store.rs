//! Client-side employee state container
//!
//! Holds the list shown to the user plus the panel flags and targets that
//! drive the create/edit/delete/detail views. All mutation goes through the
//! named actions below.
//!
//! Create refetches the whole list because the server assigns the id and
//! timestamps. Update and delete already know the target id, so they patch
//! the local list in place.

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::EmployeeApi;
use crate::client::HttpClient;
use crate::error::ClientResult;

/// Message shown when the list cannot be loaded
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load employees";

/// Snapshot of everything the views read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_create_form: bool,
    /// Target of the edit form
    pub editing: Option<Employee>,
    /// Target of the delete confirmation
    pub deleting: Option<Employee>,
    /// Target of the detail view
    pub selected: Option<Employee>,
}

pub struct EmployeeStore<C> {
    api: EmployeeApi<C>,
    state: StoreState,
}

impl<C: HttpClient> EmployeeStore<C> {
    pub fn new(client: C) -> Self {
        Self::from_api(EmployeeApi::new(client))
    }

    pub fn from_api(api: EmployeeApi<C>) -> Self {
        Self {
            api,
            state: StoreState::default(),
        }
    }

    pub fn api(&self) -> &EmployeeApi<C> {
        &self.api
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    // ========== Setters ==========

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.state.employees = employees;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
    }

    pub fn set_show_create_form(&mut self, show: bool) {
        self.state.show_create_form = show;
    }

    pub fn set_editing(&mut self, employee: Option<Employee>) {
        self.state.editing = employee;
    }

    pub fn set_deleting(&mut self, employee: Option<Employee>) {
        self.state.deleting = employee;
    }

    pub fn set_selected(&mut self, employee: Option<Employee>) {
        self.state.selected = employee;
    }

    // ========== Actions ==========

    /// Reload the list; failures land in `error` instead of being returned
    pub async fn fetch_employees(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.api.list().await {
            Ok(employees) => self.state.employees = employees,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch employees");
                self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
    }

    /// Create, then refetch the list and close the create panel
    pub async fn create_employee(&mut self, data: &EmployeeCreate) -> ClientResult<Employee> {
        let created = self.api.create(data).await?;
        self.fetch_employees().await;
        self.state.show_create_form = false;
        Ok(created)
    }

    /// Update, then swap the matching row and clear the edit target
    pub async fn update_employee(
        &mut self,
        id: i64,
        data: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        let updated = self.api.update(id, data).await?;

        if let Some(row) = self.state.employees.iter_mut().find(|e| e.id == id) {
            *row = updated.clone();
        }
        if self.state.selected.as_ref().is_some_and(|e| e.id == id) {
            self.state.selected = Some(updated.clone());
        }
        self.state.editing = None;
        Ok(updated)
    }

    /// Delete, then drop the matching row
    pub async fn delete_employee(&mut self, id: i64) -> ClientResult<()> {
        self.api.delete(id).await?;

        self.state.employees.retain(|e| e.id != id);
        if self.state.selected.as_ref().is_some_and(|e| e.id == id) {
            self.state.selected = None;
        }
        Ok(())
    }
}
