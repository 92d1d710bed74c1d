//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_data_handler, clear_handler, delete_handler, get_handler, health_handler, keys_handler,
    set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `DELETE /delete/:key` - Delete a key
/// - `GET /stats` - Get cache statistics
/// - `GET /all-data` - List every entry
/// - `GET /keys` - List every key
/// - `GET /clear` - Drop all entries
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so an externally served dashboard can call in
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", post(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/delete/:key", delete(delete_handler))
        .route("/stats", get(stats_handler))
        .route("/all-data", get(all_data_handler))
        .route("/keys", get(keys_handler))
        .route("/clear", get(clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
