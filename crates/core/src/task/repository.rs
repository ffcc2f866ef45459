//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for task CRUD operations
///
/// The mutating operations report whether a row matched the given id;
/// `update` hands back the matched row itself.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task as not completed and return it with its new id
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get all tasks of a user, ordered by id
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Task>>;

    /// Overwrite title, description and completion flag, returning the
    /// stored row. `user_id` is never changed; `None` when no row matched.
    async fn update(&self, task: &Task) -> Result<Option<Task>>;

    /// Set the completion flag, whatever its current value
    async fn mark_complete(&self, id: i64) -> Result<bool>;

    /// Delete a task by ID
    async fn delete(&self, id: i64) -> Result<bool>;
}
