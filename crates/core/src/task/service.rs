//! Task service
//!
//! Presence checks in front of the task repository. Nothing here looks
//! at other entities; a task may point at a user that does not exist.

use std::sync::Arc;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_task(&self, mut task: Task) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(Error::TitleRequired);
        }
        if task.user_id <= 0 {
            return Err(Error::UserIdRequired);
        }

        task.is_completed = false;
        self.repository.create(task).await
    }

    /// An unknown user simply has no tasks.
    pub async fn get_tasks_for_user(&self, user_id: i64) -> Result<Vec<Task>> {
        if user_id <= 0 {
            return Err(Error::UserIdInvalid);
        }

        self.repository.list_by_user(user_id).await
    }

    /// Returns the task as stored, which keeps its original owner.
    pub async fn update_task(&self, task: Task) -> Result<Task> {
        if task.id <= 0 {
            return Err(Error::TaskIdRequired);
        }

        self.repository
            .update(&task)
            .await?
            .ok_or(Error::TaskNotFound)
    }

    pub async fn mark_task_complete(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(Error::TaskIdRequired);
        }

        if !self.repository.mark_complete(id).await? {
            return Err(Error::TaskNotFound);
        }
        Ok(())
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(Error::TaskIdRequired);
        }

        if !self.repository.delete(id).await? {
            return Err(Error::TaskNotFound);
        }
        tracing::debug!(task_id = id, "Task deleted");
        Ok(())
    }
}
