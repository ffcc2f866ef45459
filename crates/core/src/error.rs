//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("user name is required")]
    NameRequired,

    #[error("task title is required")]
    TitleRequired,

    #[error("user_id is required")]
    UserIdRequired,

    #[error("user_id must be valid")]
    UserIdInvalid,

    #[error("task id is required")]
    TaskIdRequired,

    #[error("user not found")]
    UserNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl Error {
    /// Missing or malformed input, rejected before touching the store
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameRequired
                | Self::TitleRequired
                | Self::UserIdRequired
                | Self::UserIdInvalid
                | Self::TaskIdRequired
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::TaskNotFound)
    }
}
