//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /set` - Store a key-value pair
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /delete/:key` - Delete a key
//! - `GET /stats` - Get cache statistics
//! - `GET /all-data` - List every entry
//! - `GET /keys` - List every key
//! - `GET /clear` - Drop all entries
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
