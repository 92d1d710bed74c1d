//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info};

use crate::cache::{CacheEngine, CacheStats};
use crate::error::{CacheError, Result};
use crate::models::{
    AllDataResponse, ClearResponse, DeleteResponse, GetResponse, HealthResponse, KeysResponse,
    SetRequest, SetResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one cache engine instance serving every request.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Arc<CacheEngine>,
}

impl AppState {
    /// Creates a new AppState around the given engine.
    pub fn new(cache: CacheEngine) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheEngine::new(config.capacity))
    }
}

/// Handler for POST /set
///
/// Stores a key-value pair in the cache with optional TTL. Malformed bodies
/// are answered with the same JSON error shape as every other failure.
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    let Json(req) = payload.map_err(|rejection| CacheError::InvalidRequest(rejection.body_text()))?;

    debug!(key = %req.key, ttl = ?req.ttl, "set");
    state.cache.set(req.key.clone(), req.value, req.ttl).await?;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.get(&key).await?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /delete/:key
///
/// Deletes a key from the cache. Deleting an absent key still succeeds and
/// reports `deleted: false`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let deleted = state.cache.delete(&key).await?;
    debug!(key = %key, deleted, "delete");

    Ok(Json(DeleteResponse::new(key, deleted)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Handler for GET /all-data
///
/// Lists every live entry without counting as an access.
pub async fn all_data_handler(State(state): State<AppState>) -> Json<AllDataResponse> {
    Json(AllDataResponse::new(state.cache.all_data().await))
}

/// Handler for GET /keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.cache.keys().await))
}

/// Handler for GET /clear
///
/// Drops all entries; statistics are kept.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.clear().await;
    info!("Cache cleared: {} entries dropped", cleared);

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
