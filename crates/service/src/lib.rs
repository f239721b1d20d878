//! `service` crate — application rules on top of the repository.

pub mod error;
pub mod todos;

pub use error::ServiceError;
pub use todos::TodoService;

#[cfg(test)]
mod todos_tests;
