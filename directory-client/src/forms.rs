//! Create, edit and delete form state
//!
//! Forms own their raw field text and an error map keyed by field name.
//! Submitting validates locally first and only then calls the store; a
//! server error that names a field is shown on that field, anything else
//! under [`GENERAL_ERROR_KEY`].

use shared::ValidationErrors;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::validation::{
    is_create_valid, is_update_valid, validate_employee_create, validate_employee_update,
};

use crate::client::HttpClient;
use crate::error::ClientError;
use crate::store::EmployeeStore;

/// Error map key for failures not tied to a field
pub const GENERAL_ERROR_KEY: &str = "general";

pub const CREATE_FAILED_MESSAGE: &str = "Could not register the employee. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "Could not update the employee. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete the employee. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 3] = [Self::Name, Self::Email, Self::Department];

    /// Key used in payloads and error maps
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
        }
    }
}

/// Raw text of the three inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormFields {
    pub name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormFields {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::Name => self.name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }
}

fn record_submit_error(errors: &mut ValidationErrors, err: &ClientError, fallback: &str) {
    tracing::warn!(error = %err, "Employee form submission failed");
    match err {
        ClientError::Api {
            message,
            field: Some(field),
            ..
        } => errors.insert(field.as_str(), message.as_str()),
        _ => errors.insert(GENERAL_ERROR_KEY, fallback),
    }
}

// ========== Create ==========

#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeForm {
    fields: EmployeeFormFields,
    errors: ValidationErrors,
    is_submitting: bool,
}

impl CreateEmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &EmployeeFormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Set an input and clear its error
    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(field.as_str());
    }

    /// Trimmed payload; a blank department is omitted
    pub fn payload(&self) -> EmployeeCreate {
        EmployeeCreate {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            department: Some(self.fields.department.clone()),
        }
        .normalized()
    }

    /// Whether the submit button should be enabled
    pub fn is_valid(&self) -> bool {
        !self.is_submitting && is_create_valid(&self.payload())
    }

    pub fn reset(&mut self) {
        self.fields = EmployeeFormFields::default();
        self.errors.clear();
    }

    /// Validate and create; the form is cleared on success
    pub async fn submit<C: HttpClient>(&mut self, store: &mut EmployeeStore<C>) -> Option<Employee> {
        if self.is_submitting {
            return None;
        }
        let payload = self.payload();
        self.errors = validate_employee_create(&payload);
        if !self.errors.is_empty() {
            return None;
        }

        self.is_submitting = true;
        let result = store.create_employee(&payload).await;
        self.is_submitting = false;

        match result {
            Ok(employee) => {
                self.reset();
                Some(employee)
            }
            Err(e) => {
                record_submit_error(&mut self.errors, &e, CREATE_FAILED_MESSAGE);
                None
            }
        }
    }
}

// ========== Edit ==========

#[derive(Debug, Clone)]
pub struct EditEmployeeForm {
    employee_id: i64,
    fields: EmployeeFormFields,
    errors: ValidationErrors,
    is_submitting: bool,
}

impl EditEmployeeForm {
    /// Prefill from the record being edited
    pub fn new(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id,
            fields: EmployeeFormFields {
                name: employee.name.clone(),
                email: employee.email.clone(),
                department: employee.department.clone().unwrap_or_default(),
            },
            errors: ValidationErrors::default(),
            is_submitting: false,
        }
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    pub fn fields(&self) -> &EmployeeFormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(field.as_str());
    }

    /// All three fields, trimmed; an empty department clears it
    pub fn payload(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: Some(self.fields.name.clone()),
            email: Some(self.fields.email.clone()),
            department: Some(self.fields.department.clone()),
        }
        .normalized()
    }

    pub fn is_valid(&self) -> bool {
        !self.is_submitting && is_update_valid(&self.payload())
    }

    /// Validate and update; values stay in place either way
    pub async fn submit<C: HttpClient>(&mut self, store: &mut EmployeeStore<C>) -> Option<Employee> {
        if self.is_submitting {
            return None;
        }
        let payload = self.payload();
        self.errors = validate_employee_update(&payload);
        if !self.errors.is_empty() {
            return None;
        }

        self.is_submitting = true;
        let result = store.update_employee(self.employee_id, &payload).await;
        self.is_submitting = false;

        match result {
            Ok(employee) => Some(employee),
            Err(e) => {
                record_submit_error(&mut self.errors, &e, UPDATE_FAILED_MESSAGE);
                None
            }
        }
    }
}

// ========== Delete ==========

/// Confirmation dialog for a single record
#[derive(Debug, Clone)]
pub struct DeleteDialog {
    target: Employee,
    is_deleting: bool,
    error: Option<String>,
}

impl DeleteDialog {
    pub fn new(target: Employee) -> Self {
        Self {
            target,
            is_deleting: false,
            error: None,
        }
    }

    /// Dialog for the store's current delete target, if any
    pub fn for_store<C: HttpClient>(store: &EmployeeStore<C>) -> Option<Self> {
        store.state().deleting.clone().map(Self::new)
    }

    pub fn target(&self) -> &Employee {
        &self.target
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Delete the target; closes the dialog on success, stays open on failure
    pub async fn confirm<C: HttpClient>(&mut self, store: &mut EmployeeStore<C>) -> bool {
        if self.is_deleting {
            return false;
        }
        self.is_deleting = true;
        self.error = None;
        let result = store.delete_employee(self.target.id).await;
        self.is_deleting = false;

        match result {
            Ok(()) => {
                store.set_deleting(None);
                true
            }
            Err(e) => {
                tracing::warn!(employee_id = self.target.id, error = %e, "Delete failed");
                self.error = Some(DELETE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    pub fn cancel<C: HttpClient>(&self, store: &mut EmployeeStore<C>) {
        store.set_deleting(None);
    }
}
