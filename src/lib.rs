//! Response Cache - A bounded in-memory cache for computed responses
//!
//! Entries expire lazily after a fixed TTL, the table is capped by FIFO
//! eviction, and groups of entries can be dropped by tag.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheConfig, CacheEngine, Cacheable, SetOutcome};
pub use config::Config;
pub use error::CacheError;
