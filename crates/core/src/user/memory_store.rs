//! In-memory user storage
//!
//! Keeps users in a map guarded by a readers-writer lock. Ids are handed
//! out from a counter that lives under the same lock as the map.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::User;
use super::repository::UserRepository;
use crate::Result;

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: HashMap<i64, User>,
}

/// In-memory user store
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn create(&self, mut user: User) -> Result<User> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        user.id = inner.next_id;
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&user.id) {
            Some(existing) => {
                existing.name = user.name.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryUserStore::new();

        let created = store.create(User::new("Aman")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.get(1).await.unwrap(), Some(created));
        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = MemoryUserStore::new();
        let user = store.create(User::new("Aman")).await.unwrap();

        assert!(store.update(&User::new("Riya").with_id(user.id)).await.unwrap());
        assert_eq!(store.get(user.id).await.unwrap().unwrap().name, "Riya");

        assert!(store.delete(user.id).await.unwrap());
        assert!(!store.delete(user.id).await.unwrap());
        assert!(!store.update(&user).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryUserStore::new();
        let first = store.create(User::new("a")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(User::new("b")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_lose_nothing() {
        let store = Arc::new(MemoryUserStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(User::new(format!("user-{i}"))).await })
            })
            .collect();

        let mut ids: Vec<i64> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap().id)
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 64);
        assert_eq!(store.len().await, 64);
    }
}
