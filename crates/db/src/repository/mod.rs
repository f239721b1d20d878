//! The repository seam — one method per database operation.
//!
//! Every method returns a `Result<T, DbError>`. No business logic: update and
//! delete do not check that the row exists.

use async_trait::async_trait;

use crate::{DbError, NewTodo, Todo};

pub mod todos;

pub use todos::MySqlTodoRepository;

/// Storage operations on the `todos` table.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, ordered by id.
    async fn find_all(&self) -> Result<Vec<Todo>, DbError>;

    /// The todo with `id`, or [`DbError::NotFound`].
    async fn get_by_id(&self, id: i64) -> Result<Todo, DbError>;

    /// Insert a todo and return the id assigned by storage.
    async fn create(&self, todo: &NewTodo) -> Result<i64, DbError>;

    /// Replace title and description. Zero affected rows is still `Ok`.
    async fn update(&self, id: i64, todo: &NewTodo) -> Result<(), DbError>;

    /// Hard-delete the row. Zero affected rows is still `Ok`.
    async fn delete(&self, id: i64) -> Result<(), DbError>;
}
