//! User repository trait
//!
//! Defines the interface for user storage operations.

use async_trait::async_trait;

use super::model::User;
use crate::Result;

/// Repository interface for user storage
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with the store-assigned id
    async fn create(&self, user: User) -> Result<User>;

    /// Get a user by ID; absence is `Ok(None)`
    async fn get(&self, id: i64) -> Result<Option<User>>;

    /// Replace the user's name. Returns false when no row matched.
    async fn update(&self, user: &User) -> Result<bool>;

    /// Delete a user by ID. Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool>;
}
