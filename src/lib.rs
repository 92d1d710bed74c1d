//! LRU KV - An in-memory key-value cache server
//!
//! Bounded storage with least-recently-used eviction, per-operation
//! statistics and a small JSON REST API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::CacheEngine;
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
