//! Core library for Taskdesk
//!
//! This crate contains the core business logic, including:
//! - User and task models
//! - Repository traits with SQL and in-memory stores
//! - Services enforcing field invariants

pub mod db;
pub mod error;
pub mod task;
pub mod user;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
