//! SQLite-backed task storage

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::model::Task;
use super::repository::TaskRepository;
use crate::Result;

/// Task store over a SQLite pool
#[derive(Clone)]
pub struct SqlTaskStore {
    pool: SqlitePool,
}

impl SqlTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqlTaskStore {
    async fn create(&self, mut task: Task) -> Result<Task> {
        task.is_completed = false;

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, user_id, is_completed) VALUES (?, ?, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.user_id)
        .bind(false)
        .execute(&mut *tx)
        .await?;
        task.id = result.last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(task_id = task.id, user_id = task.user_id, "Task created");
        Ok(task)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, user_id, is_completed FROM tasks WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> Result<Option<Task>> {
        let updated = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = ?, description = ?, is_completed = ? WHERE id = ? \
             RETURNING id, title, description, user_id, is_completed",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.is_completed)
        .bind(task.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn mark_complete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE tasks SET is_completed = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    async fn create_test_store() -> SqlTaskStore {
        SqlTaskStore::new(memory_pool().await)
    }

    #[tokio::test]
    async fn test_create_task() {
        let store = create_test_store().await;

        let task = Task::new("Test task", 1)
            .with_description("A test description")
            .with_completed(true);
        let created = store.create(task).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.title, "Test task");
        assert_eq!(created.description, "A test description");
        // Completion flag is never taken from input on create
        assert!(!created.is_completed);
    }

    #[tokio::test]
    async fn test_list_by_user() {
        let store = create_test_store().await;

        store.create(Task::new("Task 1", 1)).await.unwrap();
        store.create(Task::new("Task 2", 1)).await.unwrap();
        store.create(Task::new("Other", 2)).await.unwrap();

        let tasks = store.list_by_user(1).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Task 1");
        assert_eq!(tasks[1].title, "Task 2");
        assert!(tasks.iter().all(|t| !t.is_completed));

        assert!(store.list_by_user(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_task() {
        let store = create_test_store().await;

        let mut task = store.create(Task::new("Original", 1)).await.unwrap();
        task.title = "Updated".to_string();
        task.description = "New description".to_string();
        task.is_completed = true;
        let updated = store.update(&task).await.unwrap();
        assert_eq!(updated, Some(task.clone()));

        let tasks = store.list_by_user(1).await.unwrap();
        assert_eq!(tasks, vec![task]);
    }

    #[tokio::test]
    async fn test_update_returns_stored_owner() {
        let store = create_test_store().await;
        let created = store.create(Task::new("a", 1)).await.unwrap();

        // Owner on the edit is ignored; the stored one comes back
        let edit = Task::new("b", 0).with_id(created.id);
        let updated = store.update(&edit).await.unwrap().unwrap();

        assert_eq!(updated.user_id, 1);
        assert_eq!(updated.title, "b");
        assert_eq!(store.list_by_user(1).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_nonexistent_task() {
        let store = create_test_store().await;
        let task = Task::new("Ghost", 1).with_id(77);
        assert!(store.update(&task).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_complete_is_idempotent() {
        let store = create_test_store().await;
        let task = store.create(Task::new("Finish me", 1)).await.unwrap();

        assert!(store.mark_complete(task.id).await.unwrap());
        let after_first = store.list_by_user(1).await.unwrap();

        assert!(store.mark_complete(task.id).await.unwrap());
        let after_second = store.list_by_user(1).await.unwrap();

        assert!(after_first[0].is_completed);
        assert_eq!(after_first, after_second);
        assert!(!store.mark_complete(task.id + 100).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_task() {
        let store = create_test_store().await;
        let task = store.create(Task::new("Task to delete", 1)).await.unwrap();

        assert!(store.delete(task.id).await.unwrap());
        assert!(store.list_by_user(1).await.unwrap().is_empty());

        // Delete again should return false
        assert!(!store.delete(task.id).await.unwrap());
    }
}
