//! Cache Module
//!
//! Provides a bounded in-memory cache with lazy TTL expiration, FIFO
//! eviction and tag invalidation.

mod clock;
mod config;
mod engine;
mod entry;
mod order;
mod payload;
mod stats;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use config::{CacheConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};
pub use engine::{CacheEngine, SetOutcome};
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use payload::{Cacheable, PENDING_KIND};
pub use stats::CacheStats;

// == Public Constants ==
/// Maximum allowed key length in bytes on the HTTP surface
pub const MAX_KEY_LENGTH: usize = 256;
