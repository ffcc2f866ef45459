//! SQLite-backed user storage

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::model::User;
use super::repository::UserRepository;
use crate::Result;

/// User store over a SQLite pool
#[derive(Clone)]
pub struct SqlUserStore {
    pool: SqlitePool,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlUserStore {
    async fn create(&self, mut user: User) -> Result<User> {
        // Insert and id read share one transaction; an early return rolls back.
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(&user.name)
            .execute(&mut *tx)
            .await?;
        user.id = result.last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(&user.name)
            .bind(user.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
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

    async fn create_test_store() -> SqlUserStore {
        SqlUserStore::new(memory_pool().await)
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let store = create_test_store().await;

        let first = store.create(User::new("Aman")).await.unwrap();
        let second = store.create(User::new("Riya")).await.unwrap();

        assert!(first.id > 0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Aman");
    }

    #[tokio::test]
    async fn test_get_user() {
        let store = create_test_store().await;

        let created = store.create(User::new("Aman")).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        // Absence is not an error
        assert!(store.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_name_is_bound_not_interpolated() {
        let store = create_test_store().await;

        let name = "Robert'); DROP TABLE users;--";
        let created = store.create(User::new(name)).await.unwrap();

        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, name);
    }

    #[tokio::test]
    async fn test_update_user() {
        let store = create_test_store().await;

        let mut user = store.create(User::new("Aman")).await.unwrap();
        user.name = "Aman K".to_string();
        assert!(store.update(&user).await.unwrap());
        assert_eq!(store.get(user.id).await.unwrap().unwrap().name, "Aman K");

        let missing = User::new("Ghost").with_id(404);
        assert!(!store.update(&missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let store = create_test_store().await;

        let user = store.create(User::new("Aman")).await.unwrap();
        assert!(store.delete(user.id).await.unwrap());
        assert!(store.get(user.id).await.unwrap().is_none());

        // Delete again should return false
        assert!(!store.delete(user.id).await.unwrap());
    }
}
