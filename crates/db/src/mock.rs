//! `MockTodoRepository` — an in-memory test double for `TodoRepository`.
//!
//! Useful in service and controller tests where a live MySQL instance is
//! either unavailable or irrelevant.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{DbError, NewTodo, Todo, TodoRepository};

/// Identifies one repository method, for failure injection and call tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindAll,
    GetById,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// A mock repository that keeps rows in memory, records every call it
/// receives, and fails the operations it was told to fail.
pub struct MockTodoRepository {
    table: Mutex<Table>,
    failing: HashSet<Operation>,
    /// All operations seen by this repository (in call order).
    pub calls: Arc<Mutex<Vec<Operation>>>,
}

impl MockTodoRepository {
    /// Create an empty repository that always succeeds.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table { rows: BTreeMap::new(), next_id: 1 }),
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a repository pre-populated with `todos`, ids assigned from 1.
    pub fn seeded(todos: impl IntoIterator<Item = NewTodo>) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.table.lock().unwrap();
            for todo in todos {
                table.insert(&todo);
            }
        }
        repo
    }

    /// Create a repository whose every operation fails with
    /// `DbError::StorageFailure`, as if the connection were lost.
    pub fn failing() -> Self {
        Self::new()
            .fail_on(Operation::FindAll)
            .fail_on(Operation::GetById)
            .fail_on(Operation::Create)
            .fail_on(Operation::Update)
            .fail_on(Operation::Delete)
    }

    /// Make `operation` fail with `DbError::StorageFailure`.
    pub fn fail_on(mut self, operation: Operation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Number of times `operation` has been called.
    pub fn call_count(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|op| **op == operation)
            .count()
    }

    /// Snapshot of the stored rows, ordered by id.
    pub fn rows(&self) -> Vec<Todo> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }

    fn enter(&self, operation: Operation) -> Result<(), DbError> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.contains(&operation) {
            return Err(DbError::StorageFailure(sqlx::Error::Protocol(format!(
                "mocked failure in {operation:?}"
            ))));
        }
        Ok(())
    }
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    fn insert(&mut self, todo: &NewTodo) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(
            id,
            Todo {
                id,
                title: todo.title.clone(),
                description: todo.description.clone(),
                created_at: None,
                updated_at: None,
            },
        );
        id
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, DbError> {
        self.enter(Operation::FindAll)?;
        Ok(self.rows())
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, DbError> {
        self.enter(Operation::GetById)?;
        self.table
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn create(&self, todo: &NewTodo) -> Result<i64, DbError> {
        self.enter(Operation::Create)?;
        Ok(self.table.lock().unwrap().insert(todo))
    }

    async fn update(&self, id: i64, todo: &NewTodo) -> Result<(), DbError> {
        self.enter(Operation::Update)?;
        if let Some(row) = self.table.lock().unwrap().rows.get_mut(&id) {
            row.title = todo.title.clone();
            row.description = todo.description.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.enter(Operation::Delete)?;
        self.table.lock().unwrap().rows.remove(&id);
        Ok(())
    }
}
