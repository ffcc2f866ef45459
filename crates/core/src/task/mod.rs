//! Task module
//!
//! This module contains task-related types and logic.

mod memory_store;
mod model;
mod repository;
mod service;
mod sql_store;

pub use memory_store::MemoryTaskStore;
pub use model::Task;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use sql_store::SqlTaskStore;
