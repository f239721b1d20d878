//! Todo application service.
//!
//! Thin orchestration over a [`TodoRepository`]:
//! - `find_all`, `get_by_id`, `create` and `delete` delegate directly.
//! - `update` checks that the todo exists first, so an update of a missing
//!   id is reported as `NotFound` instead of silently touching zero rows.

use std::sync::Arc;

use db::{NewTodo, Todo, TodoRepository};
use tracing::{info, instrument};

use crate::ServiceError;

/// Shared service handed to every request handler.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Todo, ServiceError> {
        Ok(self.repository.get_by_id(id).await?)
    }

    #[instrument(skip(self, todo))]
    pub async fn create(&self, todo: &NewTodo) -> Result<i64, ServiceError> {
        let id = self.repository.create(todo).await?;
        info!(id, "todo created");
        Ok(id)
    }

    /// Replace title and description of an existing todo.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] if `id` does not exist; the repository's
    /// update is not called in that case.
    #[instrument(skip(self, todo))]
    pub async fn update(&self, id: i64, todo: &NewTodo) -> Result<(), ServiceError> {
        self.repository.get_by_id(id).await?;

        self.repository.update(id, todo).await?;
        Ok(())
    }

    /// Delete is idempotent: a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        Ok(self.repository.delete(id).await?)
    }
}
