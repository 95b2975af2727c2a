//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as stored and returned by the API
///
/// `id`, `created_at` and `updated_at` are assigned by the server.
/// Timestamps are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
///
/// A missing `name` or `email` deserializes to an empty string so validation
/// can report it as a required field instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Trim every field; a blank department becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self
                .department
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

/// Update employee payload (partial)
///
/// Only the keys present are written. A present but blank `department`
/// clears the stored department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeUpdate {
    /// True when no recognized field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.department.is_none()
    }

    /// Trim every present field, keeping presence intact
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email.map(|e| e.trim().to_string()),
            department: self.department.map(|d| d.trim().to_string()),
        }
    }

    /// Department value to store: `Some(None)` clears the column
    pub fn department_value(&self) -> Option<Option<&str>> {
        self.department
            .as_deref()
            .map(|d| if d.is_empty() { None } else { Some(d) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_missing_fields_default_to_empty() {
        let payload: EmployeeCreate = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.name, "");
        assert_eq!(payload.email, "a@x.com");
        assert!(payload.department.is_none());
    }

    #[test]
    fn create_rejects_unknown_fields() {
        let result =
            serde_json::from_str::<EmployeeCreate>(r#"{"name":"A","email":"a@x.com","age":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_normalized_trims_and_drops_blank_department() {
        let payload = EmployeeCreate::new("  Hanako ", " h@x.com ").with_department("   ");
        let normalized = payload.normalized();
        assert_eq!(normalized.name, "Hanako");
        assert_eq!(normalized.email, "h@x.com");
        assert!(normalized.department.is_none());
    }

    #[test]
    fn update_keeps_presence_when_normalizing() {
        let update = EmployeeUpdate {
            name: None,
            email: None,
            department: Some("  ".to_string()),
        }
        .normalized();
        assert!(!update.is_empty());
        assert_eq!(update.department_value(), Some(None));
    }

    #[test]
    fn update_empty_object_is_empty() {
        let update: EmployeeUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
        assert_eq!(update.department_value(), None);
    }

    #[test]
    fn update_serializes_only_present_keys() {
        let update = EmployeeUpdate {
            name: Some("B".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "B"}));
    }

    #[test]
    fn employee_serializes_null_department() {
        let employee = Employee {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            department: None,
            created_at: 10,
            updated_at: 10,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert!(json["department"].is_null());
        assert_eq!(json["id"], 1);
    }
}
