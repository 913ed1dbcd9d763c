//! Request DTOs for the response cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for the SET operation (PUT /cache/:key)
///
/// # Fields
/// - `payload`: Opaque JSON to cache; `null` or `{"kind": "pending"}` is not stored
/// - `tags`: Optional tags, overriding any `tags` array inside the payload
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The payload to store
    #[serde(default)]
    pub payload: Value,
    /// Optional invalidation tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.tags {
            Some(tags) if tags.iter().any(String::is_empty) => {
                Some("Tags cannot be empty strings".to_string())
            }
            _ => None,
        }
    }
}

/// Validates a key taken from the request path.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
