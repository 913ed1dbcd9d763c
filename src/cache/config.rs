//! Engine Configuration
//!
//! Time-to-live and capacity bound supplied when an engine is built.

use serde::Serialize;

use crate::error::{CacheError, Result};

/// Default time-to-live: 24 hours.
pub const DEFAULT_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Default maximum number of live entries.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

// == Cache Config ==
/// Settings for a [`CacheEngine`](crate::cache::CacheEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Maximum entry age in milliseconds before it reads as absent
    pub ttl_millis: u64,
    /// Hard cap on live entries
    pub max_entries: usize,
}

impl CacheConfig {
    /// Creates a config with the given TTL and capacity.
    pub fn new(ttl_millis: u64, max_entries: usize) -> Self {
        Self {
            ttl_millis,
            max_entries,
        }
    }

    /// Returns a copy with a different TTL.
    pub fn with_ttl_millis(mut self, ttl_millis: u64) -> Self {
        self.ttl_millis = ttl_millis;
        self
    }

    /// Returns a copy with a different capacity.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Rejects settings that would make the cache useless.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidConfig(
                "max_entries must be greater than zero".to_string(),
            ));
        }
        if self.ttl_millis == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl_millis must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_millis: DEFAULT_TTL_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_millis, 86_400_000);
        assert_eq!(config.max_entries, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_config_builders() {
        let config = CacheConfig::default()
            .with_ttl_millis(500)
            .with_max_entries(3);
        assert_eq!(config, CacheConfig::new(500, 3));
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = CacheConfig::new(1_000, 0);
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = CacheConfig::new(0, 10);
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }
}
