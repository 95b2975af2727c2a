//! Field-level validation for employee payloads
//!
//! Pure functions shared by the route layer and the client forms. Each
//! validator returns a [`ValidationErrors`] map from field name to a
//! human-readable message; an empty map means the payload is acceptable.

use std::collections::BTreeMap;

use crate::models::{EmployeeCreate, EmployeeUpdate};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const DEPARTMENT_MAX_CHARS: usize = 100;

/// Fields in the order errors are reported
const FIELD_ORDER: [&str; 3] = ["name", "email", "department"];

/// Field name → error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// First failing field: payload fields in form order, then anything else
    pub fn first(&self) -> Option<(&str, &str)> {
        FIELD_ORDER
            .iter()
            .find_map(|f| self.errors.get_key_value(*f))
            .or_else(|| self.errors.iter().next())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain
pub fn is_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Parse a path id: a positive decimal integer without sign or leading zero
pub fn parse_employee_id(raw: &str) -> Option<i64> {
    let mut chars = raw.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn too_long(field: &str, limit: usize) -> String {
    format!("{field} must be at most {limit} characters")
}

fn required(field: &str) -> String {
    format!("{field} is required")
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.insert("name", required("name"));
    } else if trimmed.chars().count() > NAME_MAX_CHARS {
        errors.insert("name", too_long("name", NAME_MAX_CHARS));
    }
}

fn check_email(email: &str, errors: &mut ValidationErrors) {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        errors.insert("email", required("email"));
    } else if !is_email_shape(trimmed) {
        errors.insert("email", "Enter a valid email address");
    } else if trimmed.chars().count() > EMAIL_MAX_CHARS {
        errors.insert("email", too_long("email", EMAIL_MAX_CHARS));
    }
}

fn check_department(department: &str, errors: &mut ValidationErrors) {
    if department.trim().chars().count() > DEPARTMENT_MAX_CHARS {
        errors.insert("department", too_long("department", DEPARTMENT_MAX_CHARS));
    }
}

/// Validate a create payload: name and email required, department optional
pub fn validate_employee_create(payload: &EmployeeCreate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    check_name(&payload.name, &mut errors);
    check_email(&payload.email, &mut errors);
    if let Some(department) = &payload.department {
        check_department(department, &mut errors);
    }
    errors
}

/// Validate an update payload: only present fields are checked
pub fn validate_employee_update(payload: &EmployeeUpdate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if let Some(name) = &payload.name {
        check_name(name, &mut errors);
    }
    if let Some(email) = &payload.email {
        check_email(email, &mut errors);
    }
    if let Some(department) = &payload.department {
        check_department(department, &mut errors);
    }
    errors
}

pub fn is_create_valid(payload: &EmployeeCreate) -> bool {
    validate_employee_create(payload).is_empty()
}

pub fn is_update_valid(payload: &EmployeeUpdate) -> bool {
    validate_employee_update(payload).is_empty()
}
