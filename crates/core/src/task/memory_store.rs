//! In-memory task storage

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskRepository;
use crate::Result;

#[derive(Default)]
struct Inner {
    next_id: i64,
    tasks: HashMap<i64, Task>,
}

/// In-memory task store guarded by a readers-writer lock
#[derive(Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create(&self, mut task: Task) -> Result<Task> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        task.id = inner.next_id;
        task.is_completed = false;
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner
            .tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> Result<Option<Task>> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.tasks.get_mut(&task.id) else {
            return Ok(None);
        };
        existing.title = task.title.clone();
        existing.description = task.description.clone();
        existing.is_completed = task.is_completed;
        Ok(Some(existing.clone()))
    }

    async fn mark_complete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.tasks.get_mut(&id) {
            Some(task) => {
                task.is_completed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.tasks.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_update_keeps_owner() {
        let store = MemoryTaskStore::new();
        let task = store.create(Task::new("Original", 1)).await.unwrap();

        // user_id is not part of an update
        let edit = Task::new("Renamed", 9).with_id(task.id).with_completed(true);
        let updated = store.update(&edit).await.unwrap().unwrap();
        assert_eq!(updated.user_id, 1);

        let tasks = store.list_by_user(1).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Renamed");
        assert!(tasks[0].is_completed);
        assert!(store.list_by_user(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_complete_and_delete() {
        let store = MemoryTaskStore::new();
        let task = store.create(Task::new("Gym", 1)).await.unwrap();

        assert!(store.mark_complete(task.id).await.unwrap());
        assert!(store.mark_complete(task.id).await.unwrap());
        assert!(store.list_by_user(1).await.unwrap()[0].is_completed);

        assert!(store.delete(task.id).await.unwrap());
        assert!(!store.mark_complete(task.id).await.unwrap());
        assert!(!store.delete(task.id).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_and_writers() {
        let store = Arc::new(MemoryTaskStore::new());

        let writers = (0..32).map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store.create(Task::new(format!("task-{i}"), 1)).await.unwrap();
            })
        });
        let readers = (0..32).map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store.list_by_user(1).await.unwrap();
            })
        });

        for handle in writers.chain(readers).collect::<Vec<_>>() {
            handle.await.unwrap();
        }

        let tasks = store.list_by_user(1).await.unwrap();
        assert_eq!(tasks.len(), 32);
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=32).collect::<Vec<i64>>());
    }
}
