//! Display models derived from store state

use shared::models::Employee;

use crate::store::StoreState;

/// Shown where a record has no department
pub const DEPARTMENT_PLACEHOLDER: &str = "Not set";

/// First character of the name, used as the avatar label
pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn department_label(department: Option<&str>) -> String {
    department
        .filter(|d| !d.is_empty())
        .unwrap_or(DEPARTMENT_PLACEHOLDER)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: i64,
    pub initial: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            initial: avatar_initial(&employee.name),
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: department_label(employee.department.as_deref()),
        }
    }
}

/// What the list area renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeListView {
    Loading,
    Empty,
    Rows(Vec<EmployeeRow>),
}

impl EmployeeListView {
    pub fn from_state(state: &StoreState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.employees.is_empty() {
            Self::Empty
        } else {
            Self::Rows(state.employees.iter().map(EmployeeRow::from).collect())
        }
    }
}

/// Read-only detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetail {
    pub id: i64,
    pub initial: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub has_department: bool,
}

impl EmployeeDetail {
    pub fn new(employee: &Employee) -> Self {
        let row = EmployeeRow::from(employee);
        Self {
            id: row.id,
            initial: row.initial,
            name: row.name,
            email: row.email,
            department: row.department,
            has_department: employee.department.as_deref().is_some_and(|d| !d.is_empty()),
        }
    }

    /// Detail for the store's selected record, if any
    pub fn from_state(state: &StoreState) -> Option<Self> {
        state.selected.as_ref().map(Self::new)
    }
}
