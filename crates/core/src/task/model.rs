//! Task model definitions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task belonging to a user
///
/// `user_id` is a plain reference; nothing checks that the user exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub is_completed: bool,
}

impl Task {
    /// Create a new, not yet persisted task for the given user
    pub fn new(title: impl Into<String>, user_id: i64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            user_id,
            is_completed: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task", 3);
        assert_eq!(task.id, 0);
        assert_eq!(task.title, "Test task");
        assert_eq!(task.user_id, 3);
        assert!(task.description.is_empty());
        assert!(!task.is_completed);
    }

    #[test]
    fn test_task_with_description() {
        let task = Task::new("Test task", 1).with_description("This is a test");
        assert_eq!(task.description, "This is a test");
    }

    #[test]
    fn test_task_json_uses_snake_case() {
        let task = Task::new("Write docs", 2).with_id(5).with_completed(true);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 5,
                "title": "Write docs",
                "description": "",
                "user_id": 2,
                "is_completed": true
            })
        );
    }
}
