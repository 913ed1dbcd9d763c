//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with its payload and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub payload: V,
    /// Tags used for group invalidation
    pub tags: Vec<String>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with `now_ms`.
    pub fn new(payload: V, tags: Vec<String>, now_ms: u64) -> Self {
        Self {
            payload,
            tags,
            created_at: now_ms,
        }
    }

    // == Age ==
    /// Returns the entry age in milliseconds at `now_ms`.
    ///
    /// A clock that moved backwards yields an age of 0.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms` at `now_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// fresh. It expires once the age is strictly greater.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    // == Has Tag ==
    /// Returns true if the entry carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now_ms))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("page", vec!["home".to_string()], 1_000);

        assert_eq!(entry.payload, "page");
        assert_eq!(entry.tags, vec!["home".to_string()]);
        assert_eq!(entry.created_at, 1_000);
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("page", Vec::new(), 1_000);

        assert!(!entry.is_expired(1_500, 1_000));
        assert!(entry.is_expired(2_001, 1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("page", Vec::new(), 1_000);

        // Age equal to the TTL is still fresh
        assert!(!entry.is_expired(2_000, 1_000));
        assert!(entry.is_expired(2_001, 1_000));
    }

    #[test]
    fn test_clock_going_backwards() {
        let entry = CacheEntry::new("page", Vec::new(), 5_000);

        assert_eq!(entry.age_ms(4_000), 0);
        assert!(!entry.is_expired(4_000, 10));
    }

    #[test]
    fn test_has_tag_exact_match() {
        let entry = CacheEntry::new(
            "page",
            vec!["blog".to_string(), "blog:42".to_string()],
            0,
        );

        assert!(entry.has_tag("blog"));
        assert!(entry.has_tag("blog:42"));
        assert!(!entry.has_tag("blog:4"));
        assert!(!entry.has_tag("Blog"));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("page", Vec::new(), 1_000);

        assert_eq!(entry.ttl_remaining_ms(1_000, 10_000), 10_000);
        assert_eq!(entry.ttl_remaining_ms(4_000, 10_000), 7_000);
        assert_eq!(entry.ttl_remaining_ms(20_000, 10_000), 0);
    }
}
