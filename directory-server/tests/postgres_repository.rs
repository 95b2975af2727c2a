//! PostgreSQL repository tests
//!
//! Need a live database: set `TEST_DATABASE_URL` and run with `--ignored`.
//! Every test truncates the employees table first, so point it at a scratch
//! database.

use directory_server::db::{EmployeeRepository, PgEmployeeRepository, RepoError};
use shared::models::{EmployeeCreate, EmployeeUpdate};
use sqlx::PgPool;

async fn repository() -> PgEmployeeRepository {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.expect("connect to test database");
    let repo = PgEmployeeRepository::new(pool);
    repo.ensure_schema().await.expect("create schema");
    sqlx::query("TRUNCATE employees RESTART IDENTITY")
        .execute(repo.pool())
        .await
        .expect("truncate employees");
    repo
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_then_read_back() {
    let repo = repository().await;
    let created = repo
        .create(&EmployeeCreate::new("Taro", "taro@example.com").with_department("Sales"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert!(repo.ping().await);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unique_email_is_enforced_by_the_table() {
    let repo = repository().await;
    repo.create(&EmployeeCreate::new("A", "a@x.com")).await.unwrap();

    let err = repo
        .create(&EmployeeCreate::new("B", "a@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::EmailTaken));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn partial_update_and_department_clear() {
    let repo = repository().await;
    let created = repo
        .create(&EmployeeCreate::new("A", "a@x.com").with_department("Ops"))
        .await
        .unwrap();

    let renamed = repo
        .update(
            created.id,
            &EmployeeUpdate {
                name: Some("B".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "B");
    assert_eq!(renamed.email, "a@x.com");
    assert_eq!(renamed.department.as_deref(), Some("Ops"));
    assert!(renamed.updated_at >= created.updated_at);

    let cleared = repo
        .update(
            created.id,
            &EmployeeUpdate {
                department: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.department, None);

    let missing = repo
        .update(
            created.id + 1000,
            &EmployeeUpdate {
                name: Some("C".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn count_by_email_excludes_the_given_id() {
    let repo = repository().await;
    let a = repo.create(&EmployeeCreate::new("A", "a@x.com")).await.unwrap();

    assert_eq!(repo.count_by_email("a@x.com", None).await.unwrap(), 1);
    assert_eq!(repo.count_by_email("a@x.com", Some(a.id)).await.unwrap(), 0);
    assert_eq!(repo.count_by_email("b@x.com", None).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_is_newest_first_and_delete_is_final() {
    let repo = repository().await;
    let first = repo.create(&EmployeeCreate::new("A", "a@x.com")).await.unwrap();
    let second = repo.create(&EmployeeCreate::new("B", "b@x.com")).await.unwrap();

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    assert!(repo.delete(first.id).await.unwrap());
    assert!(!repo.delete(first.id).await.unwrap());
    assert!(repo.find_by_id(first.id).await.unwrap().is_none());
}
