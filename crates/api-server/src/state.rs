//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;
use taskdesk_core::task::{MemoryTaskStore, SqlTaskStore, TaskRepository, TaskService};
use taskdesk_core::user::{MemoryUserStore, SqlUserStore, UserRepository, UserService};

use crate::config::{Config, StoreKind};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: UserService,
    tasks: TaskService,
    store: StoreKind,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        store: StoreKind,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                users: UserService::new(users),
                tasks: TaskService::new(tasks),
                store,
            }),
        }
    }

    /// State backed by SQL stores sharing one pool
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqlUserStore::new(pool.clone())),
            Arc::new(SqlTaskStore::new(pool)),
            StoreKind::Sql,
        )
    }

    /// State backed by in-memory maps
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryTaskStore::new()),
            StoreKind::Memory,
        )
    }

    /// Build the state the config asks for, connecting and migrating the
    /// database when the SQL store is selected.
    pub async fn from_config(config: &Config) -> taskdesk_core::Result<Self> {
        match config.store {
            StoreKind::Memory => Ok(Self::in_memory()),
            StoreKind::Sql => {
                let pool =
                    taskdesk_core::db::connect(&config.database_url, config.max_connections)
                        .await?;
                Ok(Self::with_pool(pool))
            }
        }
    }

    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    pub fn tasks(&self) -> &TaskService {
        &self.inner.tasks
    }

    pub fn store(&self) -> StoreKind {
        self.inner.store
    }
}
