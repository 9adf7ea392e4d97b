//! Hand-written test double for [`TodoRepository`].
//!
//! `TodoRepositoryMock` answers from a configured closure and records every
//! call, so tests can assert both the returned value and how the port was used.

use crate::domain::{Todo, TodoId};
use crate::ports::{Result, TodoRepository};
use std::sync::{Mutex, PoisonError};

type FindByIdFunc = Box<dyn Fn(TodoId) -> Result<Todo> + Send + Sync>;

/// Arguments of one recorded `find_by_id` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindByIdCall {
    pub id: TodoId,
}

/// Repository double that records `find_by_id` calls and answers from a closure.
pub struct TodoRepositoryMock {
    find_by_id_func: FindByIdFunc,
    find_by_id_calls: Mutex<Vec<FindByIdCall>>,
}

impl TodoRepositoryMock {
    /// Creates a new TodoRepositoryMock with the given `find_by_id` behavior
    pub fn new<F>(find_by_id_func: F) -> Self
    where
        F: Fn(TodoId) -> Result<Todo> + Send + Sync + 'static,
    {
        Self {
            find_by_id_func: Box::new(find_by_id_func),
            find_by_id_calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that answers every call with a clone of `output`.
    pub fn returning(output: Result<Todo>) -> Self {
        Self::new(move |_| output.clone())
    }

    /// Calls recorded so far, oldest first.
    pub fn find_by_id_calls(&self) -> Vec<FindByIdCall> {
        self.find_by_id_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TodoRepository for TodoRepositoryMock {
    fn find_by_id(&self, id: TodoId) -> Result<Todo> {
        self.find_by_id_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(FindByIdCall { id });
        (self.find_by_id_func)(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepoError;

    #[test]
    fn test_records_calls_in_order() {
        let mock = TodoRepositoryMock::returning(Ok(Todo::default()));
        assert!(mock.find_by_id_calls().is_empty());

        mock.find_by_id(2).unwrap();
        mock.find_by_id(1).unwrap();

        assert_eq!(
            mock.find_by_id_calls(),
            vec![FindByIdCall { id: 2 }, FindByIdCall { id: 1 }]
        );
    }

    #[test]
    fn test_returning_repeats_configured_error() {
        let mock = TodoRepositoryMock::returning(Err(RepoError::NotFound(2)));
        assert_eq!(mock.find_by_id(2), Err(RepoError::NotFound(2)));
        assert_eq!(mock.find_by_id(3), Err(RepoError::NotFound(2)));
        assert_eq!(mock.find_by_id_calls().len(), 2);
    }

    #[test]
    fn test_new_passes_id_to_closure() {
        let mock = TodoRepositoryMock::new(|id| Ok(Todo::default().with_id(id * 10)));
        assert_eq!(mock.find_by_id(4).unwrap().id, 40);
    }
}
