use crate::domain::{Todo, TodoId};
use crate::ports::{Result, TodoRepository};
use log::debug;

/// Read-side use cases for todos
pub trait TodoUsecase {
    fn one(&self, id: TodoId) -> Result<Todo>;
}

/// Application service that delegates todo lookups to the injected repository
pub struct TodoUsecaseImpl {
    todo_repository: Box<dyn TodoRepository>,
}

impl TodoUsecaseImpl {
    /// Creates a new TodoUsecaseImpl with the given repository
    pub fn new(todo_repository: Box<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }
}

impl TodoUsecase for TodoUsecaseImpl {
    /// Returns the repository result unchanged, errors included
    fn one(&self, id: TodoId) -> Result<Todo> {
        debug!("usecase=one id={}", id);
        self.todo_repository.find_by_id(id)
    }
}
