//! Tests for `TodoService`.
//!
//! These use `MockTodoRepository` so no MySQL connection is required.

use std::collections::HashSet;
use std::sync::Arc;

use db::mock::{MockTodoRepository, Operation};
use db::{DbError, NewTodo};

use crate::{ServiceError, TodoService};

fn sample_todos(num: usize) -> Vec<NewTodo> {
    (0..num)
        .map(|i| NewTodo::new(format!("sample title{i}"), format!("sample description{i}")))
        .collect()
}

fn service_over(repo: MockTodoRepository) -> (TodoService, Arc<MockTodoRepository>) {
    let repo = Arc::new(repo);
    (TodoService::new(repo.clone()), repo)
}

// ============================================================
// find_all
// ============================================================

#[tokio::test]
async fn find_all_returns_every_todo() {
    let (service, _) = service_over(MockTodoRepository::seeded(sample_todos(5)));

    let todos = service.find_all().await.expect("find_all should succeed");
    assert_eq!(todos.len(), 5);

    let ids: HashSet<i64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 5);
    for todo in &todos {
        let index = todo.id - 1;
        assert_eq!(todo.title, format!("sample title{index}"));
        assert_eq!(todo.description, format!("sample description{index}"));
    }
}

#[tokio::test]
async fn find_all_propagates_storage_failure() {
    let (service, _) = service_over(MockTodoRepository::failing());

    let err = service.find_all().await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(DbError::StorageFailure(_))));
}

// ============================================================
// get_by_id
// ============================================================

#[tokio::test]
async fn get_by_id_returns_todo() {
    let (service, _) = service_over(MockTodoRepository::seeded(sample_todos(2)));

    let todo = service.get_by_id(2).await.unwrap();
    assert_eq!(todo.id, 2);
    assert_eq!(todo.title, "sample title1");
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let (service, _) = service_over(MockTodoRepository::new());

    let err = service.get_by_id(999_999).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn get_by_id_propagates_storage_failure() {
    let (service, _) = service_over(MockTodoRepository::new().fail_on(Operation::GetById));

    let err = service.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(_)));
}

// ============================================================
// create
// ============================================================

#[tokio::test]
async fn create_then_get_by_id_round_trips() {
    let (service, _) = service_over(MockTodoRepository::new());
    let input = NewTodo::new("sample title0", "sample description0");

    let id = service.create(&input).await.unwrap();
    let todo = service.get_by_id(id).await.unwrap();

    assert_eq!(todo.id, id);
    assert_eq!(todo.title, input.title);
    assert_eq!(todo.description, input.description);
}

#[tokio::test]
async fn create_propagates_storage_failure() {
    let (service, _) = service_over(MockTodoRepository::failing());

    let err = service.create(&NewTodo::new("t", "d")).await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(_)));
}

// ============================================================
// update
// ============================================================

#[tokio::test]
async fn update_missing_id_is_not_found_and_never_calls_repository_update() {
    let (service, repo) = service_over(MockTodoRepository::new());

    let err = service
        .update(999_999, &NewTodo::new("t", "d"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound));
    assert_eq!(repo.call_count(Operation::GetById), 1);
    assert_eq!(repo.call_count(Operation::Update), 0);
    assert!(repo.rows().is_empty());
}

#[tokio::test]
async fn update_existing_replaces_fields() {
    let (service, repo) = service_over(MockTodoRepository::seeded(sample_todos(3)));

    service
        .update(2, &NewTodo::new("new title", "new description"))
        .await
        .unwrap();

    let todo = service.get_by_id(2).await.unwrap();
    assert_eq!(todo.id, 2);
    assert_eq!(todo.title, "new title");
    assert_eq!(todo.description, "new description");
    assert_eq!(repo.call_count(Operation::Update), 1);

    // Neighbours untouched.
    assert_eq!(service.get_by_id(1).await.unwrap().title, "sample title0");
    assert_eq!(service.get_by_id(3).await.unwrap().title, "sample title2");
}

#[tokio::test]
async fn update_propagates_storage_failure_from_existence_check() {
    let (service, repo) = service_over(
        MockTodoRepository::seeded(sample_todos(1)).fail_on(Operation::GetById),
    );

    let err = service.update(1, &NewTodo::new("t", "d")).await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(_)));
    assert_eq!(repo.call_count(Operation::Update), 0);
}

#[tokio::test]
async fn update_propagates_storage_failure_from_update() {
    let (service, repo) = service_over(
        MockTodoRepository::seeded(sample_todos(1)).fail_on(Operation::Update),
    );

    let err = service.update(1, &NewTodo::new("t", "d")).await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(_)));
    assert_eq!(repo.rows()[0].title, "sample title0");
}

// ============================================================
// delete
// ============================================================

#[tokio::test]
async fn delete_then_get_by_id_is_not_found() {
    let (service, _) = service_over(MockTodoRepository::seeded(sample_todos(1)));

    service.delete(1).await.unwrap();
    assert!(matches!(service.get_by_id(1).await, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn delete_missing_id_succeeds() {
    let (service, _) = service_over(MockTodoRepository::new());
    service.delete(42).await.expect("delete is idempotent");
}

#[tokio::test]
async fn delete_propagates_storage_failure() {
    let (service, _) = service_over(MockTodoRepository::failing());

    let err = service.delete(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageFailure(_)));
}

// ============================================================
// error mapping
// ============================================================

#[test]
fn db_error_kinds_are_preserved() {
    assert!(matches!(ServiceError::from(DbError::NotFound), ServiceError::NotFound));
    assert!(matches!(
        ServiceError::from(DbError::StorageFailure(sqlx::Error::PoolClosed)),
        ServiceError::StorageFailure(DbError::StorageFailure(_))
    ));
}
