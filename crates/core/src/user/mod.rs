//! User module
//!
//! This module contains user-related types and logic.

mod memory_store;
mod model;
mod repository;
mod service;
mod sql_store;

pub use memory_store::MemoryUserStore;
pub use model::User;
pub use repository::UserRepository;
pub use service::UserService;
pub use sql_store::SqlUserStore;
