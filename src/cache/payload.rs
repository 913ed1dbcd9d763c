//! Payload Module
//!
//! The little the engine needs to know about a payload: its tags and whether
//! it is a placeholder for a computation still in flight.

use serde_json::Value;

/// Marker value of a JSON payload's `kind` field for in-flight results.
pub const PENDING_KIND: &str = "pending";

// == Cacheable Trait ==
/// A value the engine can store.
///
/// Everything else about the payload stays opaque to the cache.
pub trait Cacheable {
    /// Tags this payload belongs to, used when no explicit tags are given.
    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    /// True if this payload stands in for a result that is not ready yet.
    /// Pending payloads are never stored.
    fn is_pending(&self) -> bool {
        false
    }
}

impl Cacheable for String {}

impl Cacheable for Vec<u8> {}

impl Cacheable for Value {
    fn tags(&self) -> Vec<String> {
        self.get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_pending(&self) -> bool {
        self.is_null() || self.get("kind").and_then(Value::as_str) == Some(PENDING_KIND)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_tags() {
        let payload = json!({"html": "<p>hi</p>", "tags": ["home", "nav"]});
        assert_eq!(payload.tags(), vec!["home".to_string(), "nav".to_string()]);
    }

    #[test]
    fn test_json_tags_ignores_non_strings() {
        let payload = json!({"tags": ["home", 3, null, {"x": 1}, "nav"]});
        assert_eq!(payload.tags(), vec!["home".to_string(), "nav".to_string()]);
    }

    #[test]
    fn test_json_without_tags() {
        assert!(json!({"body": "x"}).tags().is_empty());
        assert!(json!({"tags": "home"}).tags().is_empty());
        assert!(json!([1, 2, 3]).tags().is_empty());
    }

    #[test]
    fn test_json_pending_marker() {
        assert!(json!({"kind": PENDING_KIND}).is_pending());
        assert!(!json!({"kind": "page"}).is_pending());
        assert!(!json!({"body": "x"}).is_pending());
    }

    #[test]
    fn test_json_null_is_pending() {
        assert!(Value::Null.is_pending());
    }

    #[test]
    fn test_plain_values_never_pending() {
        assert!(!"anything".to_string().is_pending());
        assert!("anything".to_string().tags().is_empty());
        assert!(!Vec::<u8>::new().is_pending());
    }
}
