//! Todo CRUD operations against MySQL.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::{DbError, DbPool, NewTodo, Todo, TodoRepository};

const FIND_ALL: &str =
    "SELECT id, title, description, createdAt, updatedAt FROM todos ORDER BY id";
const GET_BY_ID: &str =
    "SELECT id, title, description, createdAt, updatedAt FROM todos WHERE id = ?";

/// [`TodoRepository`] backed by a shared MySQL pool.
#[derive(Debug, Clone)]
pub struct MySqlTodoRepository {
    pool: DbPool,
}

impl MySqlTodoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log the driver error where it was detected and fold it into
/// [`DbError::StorageFailure`].
fn storage_failure(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
    move |err| {
        error!(operation, "execute error: {err}");
        DbError::StorageFailure(err)
    }
}

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, DbError> {
        let rows = sqlx::query_as::<_, Todo>(FIND_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_failure("find_all"))?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, DbError> {
        sqlx::query_as::<_, Todo>(GET_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_failure("get_by_id"))?
            .ok_or(DbError::NotFound)
    }

    async fn create(&self, todo: &NewTodo) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO todos (title, description) VALUES (?, ?)")
            .bind(&todo.title)
            .bind(&todo.description)
            .execute(&self.pool)
            .await
            .map_err(storage_failure("create"))?;

        Ok(result.last_insert_id() as i64)
    }

    async fn update(&self, id: i64, todo: &NewTodo) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE todos SET title = ?, description = ? WHERE id = ?")
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_failure("update"))?;

        debug!(id, rows_affected = result.rows_affected(), "todo updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_failure("delete"))?;

        debug!(id, rows_affected = result.rows_affected(), "todo deleted");
        Ok(())
    }
}
