//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: Removes entries whose TTL has elapsed at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
