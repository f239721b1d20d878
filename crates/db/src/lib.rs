//! `db` crate — pure persistence layer.
//!
//! Provides the connection pool, the `Todo` models, and the
//! [`TodoRepository`] seam with its MySQL implementation. No business logic
//! lives here.

pub mod error;
pub mod mock;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::{DbConfig, DbPool};
pub use error::DbError;
pub use models::{NewTodo, Todo};
pub use repository::{MySqlTodoRepository, TodoRepository};
