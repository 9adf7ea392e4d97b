use crate::domain::{Todo, TodoId};
use std::sync::Arc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("todo not found: {0}")]
    NotFound(TodoId),
}

/// Resolves an identifier to a todo.
/// This is a port (interface) that the usecase layer depends on instead of a concrete store
pub trait TodoRepository: Send + Sync {
    // Ok carries a todo whose id equals the requested one
    fn find_by_id(&self, id: TodoId) -> Result<Todo>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Arc<R> {
    fn find_by_id(&self, id: TodoId) -> Result<Todo> {
        (**self).find_by_id(id)
    }
}

impl<R: TodoRepository + ?Sized> TodoRepository for Box<R> {
    fn find_by_id(&self, id: TodoId) -> Result<Todo> {
        (**self).find_by_id(id)
    }
}

/// Trait for presenting a todo to an output sink
pub trait TodoPresenter: Send + Sync {
    fn present(&self, todo: &Todo) -> std::io::Result<()>;
}
