//! Route handlers

pub mod health;
pub mod task;
pub mod user;
