//! Typed calls for the employee endpoints

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, HealthStatus};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Employee API over any [`HttpClient`] transport
#[derive(Debug, Clone)]
pub struct EmployeeApi<C> {
    client: C,
}

impl<C: HttpClient> EmployeeApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.client.get("/health").await
    }

    /// All employees, newest first
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.client.get("/employees").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.client.get(&format!("/employees/{id}")).await
    }

    pub async fn create(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        self.client.post("/employees", data).await
    }

    pub async fn update(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee> {
        self.client.put(&format!("/employees/{id}"), data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/employees/{id}")).await
    }
}
