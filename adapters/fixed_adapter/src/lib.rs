use log::debug;
use todo_core::domain::{Todo, TodoId};
use todo_core::ports::{Result, TodoRepository};

/// Repository that serves the placeholder todo for any identifier.
/// Stands where a durable store would be queried; the requested id is
/// substituted into the result and the lookup never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedTodoRepository;

impl FixedTodoRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TodoRepository for FixedTodoRepository {
    fn find_by_id(&self, id: TodoId) -> Result<Todo> {
        debug!("repository=fixed find_by_id id={}", id);
        Ok(Todo::default().with_id(id))
    }
}
