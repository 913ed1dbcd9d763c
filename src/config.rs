//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{CacheConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};

const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum age of a cache entry in milliseconds
    pub ttl_millis: u64,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry time-to-live in milliseconds (default: 86400000)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            ttl_millis: env_or("CACHE_TTL_MS", DEFAULT_TTL_MS),
            max_entries: env_or("MAX_ENTRIES", DEFAULT_MAX_ENTRIES),
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }

    /// Engine settings carried by this config.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.ttl_millis, self.max_entries)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_millis: DEFAULT_TTL_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Reads `name` from the environment, falling back on absence or parse failure.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl_millis, 86_400_000);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("MAX_ENTRIES");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.ttl_millis, 86_400_000);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("RESPONSE_CACHE_TEST_PORT", "not-a-port");
        assert_eq!(env_or("RESPONSE_CACHE_TEST_PORT", 8080u16), 8080);

        env::set_var("RESPONSE_CACHE_TEST_PORT", "9090");
        assert_eq!(env_or("RESPONSE_CACHE_TEST_PORT", 8080u16), 9090);
        env::remove_var("RESPONSE_CACHE_TEST_PORT");
    }

    #[test]
    fn test_cache_config_from_server_config() {
        let config = Config {
            ttl_millis: 5_000,
            max_entries: 7,
            server_port: 1234,
        };
        assert_eq!(config.cache_config(), CacheConfig::new(5_000, 7));
    }
}
