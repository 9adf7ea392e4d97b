use serde::{Deserialize, Serialize};

pub type TodoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Creates a new Todo with the given id, title and completed flag
    pub fn new(id: TodoId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Returns the todo with its id replaced
    pub fn with_id(mut self, id: TodoId) -> Self {
        self.id = id;
        self
    }

    /// Returns the todo with its title replaced
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the todo with its completed flag replaced
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// The placeholder record: id 1, title "title", not completed.
impl Default for Todo {
    fn default() -> Self {
        Self::new(1, "title", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_placeholder_record() {
        let todo = Todo::default();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "title");
        assert!(!todo.completed);
    }

    #[test]
    fn test_with_id_overrides_only_id() {
        assert_eq!(Todo::default().with_id(42), Todo::new(42, "title", false));
    }

    #[test]
    fn test_with_title_overrides_only_title() {
        assert_eq!(Todo::default().with_title("buy milk"), Todo::new(1, "buy milk", false));
    }

    #[test]
    fn test_with_completed_overrides_only_completed() {
        assert_eq!(Todo::default().with_completed(true), Todo::new(1, "title", true));
    }

    #[test]
    fn test_overrides_combine() {
        let todo = Todo::default()
            .with_completed(true)
            .with_id(-3)
            .with_title("");
        assert_eq!(todo, Todo::new(-3, "", true));
    }

    #[test]
    fn test_serializes_with_plain_field_names() {
        let json = serde_json::to_value(Todo::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "title": "title", "completed": false })
        );
    }

    #[test]
    fn test_deserializes_from_json() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":9,"title":"write docs","completed":true}"#).unwrap();
        assert_eq!(todo, Todo::new(9, "write docs", true));
    }
}
