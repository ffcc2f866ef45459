//! User model definitions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user owning tasks
///
/// `id` is zero until the store assigns one on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
