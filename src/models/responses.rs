//! Response DTOs for the response cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, SetOutcome};

/// Response body for the GET operation (GET /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored payload
    pub payload: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, payload: Value) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }
}

/// Response body for the SET operation (PUT /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// The key that was written
    pub key: String,
    /// False when the payload was empty or pending and nothing was cached
    pub stored: bool,
    /// Number of older entries evicted to make room
    pub evicted: usize,
}

impl SetResponse {
    /// Creates a new SetResponse from the engine outcome
    pub fn new(key: impl Into<String>, outcome: SetOutcome) -> Self {
        let (stored, evicted) = match outcome {
            SetOutcome::Stored { evicted } => (true, evicted),
            SetOutcome::Skipped => (false, 0),
        };
        Self {
            key: key.into(),
            stored,
            evicted,
        }
    }
}

/// Response body for the DELETE operation (DELETE /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for tag invalidation (POST /invalidate/:tag)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// The tag that was invalidated
    pub tag: String,
    /// Number of entries removed
    pub removed: usize,
}

impl InvalidateResponse {
    pub fn new(tag: impl Into<String>, removed: usize) -> Self {
        Self {
            tag: tag.into(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
    pub invalidations: u64,
    pub skipped_writes: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            skipped_writes: stats.skipped_writes,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
