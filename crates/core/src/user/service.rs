//! User service
//!
//! Checks field presence, then hands off to the repository.

use std::sync::Arc;

use super::model::User;
use super::repository::UserRepository;
use crate::{Error, Result};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, user: User) -> Result<User> {
        if user.name.trim().is_empty() {
            return Err(Error::NameRequired);
        }

        self.repository.create(user).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.repository.get(id).await?.ok_or(Error::UserNotFound)
    }

    pub async fn update_user(&self, id: i64, name: String) -> Result<User> {
        if id <= 0 {
            return Err(Error::UserIdInvalid);
        }
        if name.trim().is_empty() {
            return Err(Error::NameRequired);
        }

        let user = User { id, name };
        if !self.repository.update(&user).await? {
            return Err(Error::UserNotFound);
        }
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(Error::UserIdInvalid);
        }

        if !self.repository.delete(id).await? {
            return Err(Error::UserNotFound);
        }
        Ok(())
    }
}
