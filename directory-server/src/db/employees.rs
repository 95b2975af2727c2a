//! Employee database operations (PostgreSQL)

use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::util::now_millis;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{EmployeeRepository, RepoError, RepoResult};
use crate::config::DatabaseConfig;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          BIGSERIAL PRIMARY KEY,
        name        VARCHAR(100) NOT NULL,
        email       VARCHAR(255) NOT NULL UNIQUE,
        department  VARCHAR(100),
        created_at  BIGINT NOT NULL,
        updated_at  BIGINT NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_employees_created_at ON employees (created_at DESC)";

const SELECT_COLUMNS: &str = "SELECT id, name, email, department, created_at, updated_at FROM employees";

/// Map a write failure, turning unique violations into [`RepoError::EmailTaken`]
fn map_write_error(e: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepoError::EmailTaken;
        }
    }
    RepoError::Database(e)
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a bounded pool without connecting; connections open on first use
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the employees table and its index when missing
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list(&self) -> RepoResult<Vec<Employee>> {
        let rows: Vec<Employee> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn count_by_email(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employees WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn create(&self, data: &EmployeeCreate) -> RepoResult<Employee> {
        let now = now_millis();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (name, email, department, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.department.as_deref())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        // Read back the inserted row
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Invariant(format!("employee {id} missing right after insert")))
    }

    async fn update(&self, id: i64, data: &EmployeeUpdate) -> RepoResult<Option<Employee>> {
        if data.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE employees SET ");
        {
            let mut fields = qb.separated(", ");
            if let Some(name) = &data.name {
                fields.push("name = ");
                fields.push_bind_unseparated(name.clone());
            }
            if let Some(email) = &data.email {
                fields.push("email = ");
                fields.push_bind_unseparated(email.clone());
            }
            if let Some(department) = data.department_value() {
                fields.push("department = ");
                fields.push_bind_unseparated(department.map(str::to_string));
            }
            // Never move updated_at backwards
            fields.push("updated_at = GREATEST(updated_at, ");
            fields.push_bind_unseparated(now_millis());
            fields.push_unseparated(")");
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);

        qb.build()
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                false
            }
        }
    }
}
