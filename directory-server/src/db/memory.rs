//! In-process employee storage
//!
//! Same contract as the PostgreSQL repository. The unique email constraint
//! is checked and applied under one write lock, so two racing writers can
//! never both succeed with the same address.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::util::now_millis;

use super::{EmployeeRepository, RepoError, RepoResult};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl Table {
    fn email_in_use(&self, email: &str, exclude_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|e| e.email == email && Some(e.id) != exclude_id)
    }
}

#[derive(Debug)]
pub struct MemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl Default for MemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn list(&self) -> RepoResult<Vec<Employee>> {
        let mut rows: Vec<Employee> = self.table.read().rows.values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn count_by_email(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<i64> {
        let table = self.table.read();
        let count = table
            .rows
            .values()
            .filter(|e| e.email == email && Some(e.id) != exclude_id)
            .count();
        Ok(count as i64)
    }

    async fn create(&self, data: &EmployeeCreate) -> RepoResult<Employee> {
        let mut table = self.table.write();
        if table.email_in_use(&data.email, None) {
            return Err(RepoError::EmailTaken);
        }

        let id = table.next_id;
        table.next_id += 1;
        let now = now_millis();
        let employee = Employee {
            id,
            name: data.name.clone(),
            email: data.email.clone(),
            department: data.department.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, data: &EmployeeUpdate) -> RepoResult<Option<Employee>> {
        let mut table = self.table.write();
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if data.is_empty() {
            return Ok(table.rows.get(&id).cloned());
        }
        if let Some(email) = &data.email {
            if table.email_in_use(email, Some(id)) {
                return Err(RepoError::EmailTaken);
            }
        }

        let Some(employee) = table.rows.get_mut(&id) else {
            return Err(RepoError::Invariant(format!("employee {id} vanished under lock")));
        };
        if let Some(name) = &data.name {
            employee.name = name.clone();
        }
        if let Some(email) = &data.email {
            employee.email = email.clone();
        }
        if let Some(department) = data.department_value() {
            employee.department = department.map(str::to_string);
        }
        employee.updated_at = employee.updated_at.max(now_millis());
        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> EmployeeCreate {
        EmployeeCreate::new(name, email)
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.create(&payload("A", "a@x.com")).await.unwrap();
        let b = repo.create(&payload("B", "b@x.com")).await.unwrap();
        assert!(a.id > 0);
        assert!(b.id > a.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = MemoryEmployeeRepository::new();
        repo.create(&payload("A", "a@x.com")).await.unwrap();
        let err = repo.create(&payload("A2", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::EmailTaken));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = MemoryEmployeeRepository::new();
        for i in 0..3 {
            repo.create(&payload("E", &format!("e{i}@x.com"))).await.unwrap();
        }
        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo
            .create(&payload("A", "a@x.com").with_department("Sales"))
            .await
            .unwrap();

        let update = EmployeeUpdate {
            name: Some("B".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap().unwrap();
        assert_eq!(updated.name, "B");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.department.as_deref(), Some("Sales"));
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_blank_department_clears_it() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo
            .create(&payload("A", "a@x.com").with_department("Sales"))
            .await
            .unwrap();
        let update = EmployeeUpdate {
            department: Some(String::new()),
            ..Default::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap().unwrap();
        assert!(updated.department.is_none());
    }

    #[tokio::test]
    async fn update_without_fields_is_a_plain_read() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo.create(&payload("A", "a@x.com")).await.unwrap();
        let same = repo
            .update(created.id, &EmployeeUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn update_missing_id_is_none() {
        let repo = MemoryEmployeeRepository::new();
        let update = EmployeeUpdate {
            name: Some("B".to_string()),
            ..Default::default()
        };
        assert!(repo.update(99, &update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_to_own_email_is_allowed() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo.create(&payload("A", "a@x.com")).await.unwrap();
        let update = EmployeeUpdate {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert!(repo.update(created.id, &update).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_to_other_email_is_rejected() {
        let repo = MemoryEmployeeRepository::new();
        repo.create(&payload("A", "a@x.com")).await.unwrap();
        let b = repo.create(&payload("B", "b@x.com")).await.unwrap();
        let update = EmployeeUpdate {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let err = repo.update(b.id, &update).await.unwrap_err();
        assert!(matches!(err, RepoError::EmailTaken));
        let unchanged = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(unchanged.email, "b@x.com");
    }

    #[tokio::test]
    async fn delete_twice_reports_false_the_second_time() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo.create(&payload("A", "a@x.com")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn count_by_email_excludes_given_id() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.create(&payload("A", "a@x.com")).await.unwrap();
        assert_eq!(repo.count_by_email("a@x.com", None).await.unwrap(), 1);
        assert_eq!(repo.count_by_email("a@x.com", Some(a.id)).await.unwrap(), 0);
        assert_eq!(repo.count_by_email("z@x.com", None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.create(&payload("A", "a@x.com")).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(&payload("B", "a@x.com")).await.unwrap();
        assert!(b.id > a.id);
    }
}
