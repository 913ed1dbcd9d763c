//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheConfig, CacheEngine, Clock, SystemClock};
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, DeleteResponse, GetResponse, HealthResponse, InvalidateResponse, SetRequest,
    SetResponse, StatsResponse,
};

/// Engine type served over HTTP: string keys, JSON payloads.
pub type HttpCache = CacheEngine<String, Value, Box<dyn Clock>>;

/// Application state shared across all handlers.
///
/// The engine locks internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<HttpCache>,
}

impl AppState {
    /// Creates a new AppState around an already built engine.
    pub fn new(cache: HttpCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Builds a fresh engine on the system clock.
    pub fn from_config(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Builds a fresh engine on a custom clock.
    pub fn with_clock(config: CacheConfig, clock: impl Clock + 'static) -> Self {
        let clock: Box<dyn Clock> = Box::new(clock);
        Self::new(CacheEngine::with_clock(config, clock))
    }
}

fn check_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(msg) => Err(CacheError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /cache/:key
///
/// Stores a payload; empty or pending payloads are acknowledged but not cached.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    check_key(&key)?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let payload = Some(req.payload).filter(|p| !p.is_null());
    let outcome = state.cache.set(key.clone(), payload, req.tags);
    debug!(%key, ?outcome, "PUT /cache");

    Ok(Json(SetResponse::new(key, outcome)))
}

/// Handler for GET /cache/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    check_key(&key)?;
    match state.cache.get(&key) {
        Some(payload) => Ok(Json(GetResponse::new(key, payload))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    check_key(&key)?;
    if state.cache.delete(&key) {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for POST /invalidate/:tag
///
/// Always succeeds; a tag nothing carries removes zero entries.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Json<InvalidateResponse> {
    let removed = state.cache.invalidate_tag(&tag);
    Json(InvalidateResponse::new(tag, removed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
