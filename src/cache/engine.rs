//! Cache Engine Module
//!
//! Main cache engine combining HashMap storage with FIFO insertion tracking,
//! lazy TTL expiration and tag invalidation.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::cache::{
    CacheConfig, CacheEntry, CacheStats, Cacheable, Clock, InsertionOrder, SystemClock,
};

// == Set Outcome ==
/// What a [`CacheEngine::set`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The payload was stored, evicting `evicted` older entries
    Stored { evicted: usize },
    /// The payload was empty or pending and nothing was written
    Skipped,
}

impl SetOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, SetOutcome::Stored { .. })
    }
}

/// An entry plus its position in the insertion order.
#[derive(Debug)]
struct Slot<V> {
    seq: u64,
    entry: CacheEntry<V>,
}

/// Everything guarded by the engine lock.
#[derive(Debug)]
struct CacheTable<K, V> {
    entries: HashMap<K, Slot<V>>,
    order: InsertionOrder<K>,
    stats: CacheStats,
}

impl<K, V> CacheTable<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
        }
    }

    /// Removes `key` from both the entry map and the order index.
    fn remove<Q>(&mut self, key: &Q) -> Option<CacheEntry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.entries.remove(key)?;
        self.order.remove(slot.seq);
        Some(slot.entry)
    }
}

// == Cache Engine ==
/// Bounded, expiring, tag-addressable key/value store.
///
/// Entries older than `ttl_millis` read as absent and are dropped when a
/// `get` finds them. Once a `set` pushes the table past `max_entries`, the
/// oldest inserted entries are evicted first. A replaced key counts as newly
/// inserted; reads never change eviction order.
///
/// All operations take `&self` and lock one internal mutex, so an engine can
/// be shared across threads behind an `Arc`.
pub struct CacheEngine<K, V, C = SystemClock> {
    table: Mutex<CacheTable<K, V>>,
    config: CacheConfig,
    clock: C,
}

impl<K, V> CacheEngine<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Cacheable + Clone,
{
    // == Constructor ==
    /// Creates an engine using the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> CacheEngine<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Cacheable + Clone,
    C: Clock,
{
    /// Creates an engine with a custom clock.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            table: Mutex::new(CacheTable::new()),
            config,
            clock,
        }
    }

    // Poisoning is ignored: no operation leaves the table half-updated.
    fn lock(&self) -> MutexGuard<'_, CacheTable<K, V>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Returns `None` on a miss. An entry found past its TTL is removed and
    /// also reported as a miss. A hit neither refreshes the timestamp nor
    /// moves the entry in eviction order.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now_ms();
        let ttl = self.config.ttl_millis;
        let mut guard = self.lock();
        let table = &mut *guard;

        let expired = match table.entries.get(key) {
            Some(slot) => slot.entry.is_expired(now, ttl),
            None => {
                table.stats.record_miss();
                return None;
            }
        };

        if expired {
            if let Some(entry) = table.remove(key) {
                debug!(age_ms = entry.age_ms(now), ttl_ms = ttl, "Cache entry expired");
            }
            table.stats.record_miss();
            table.stats.record_expiration();
            return None;
        }

        let payload = table.entries.get(key).map(|slot| slot.entry.payload.clone());
        table.stats.record_hit();
        payload
    }

    // == Set ==
    /// Stores `payload` under `key`.
    ///
    /// Empty (`None`) and pending payloads are skipped without touching the
    /// table, so an existing entry for `key` survives. Explicit `tags` take
    /// precedence over the payload's own tags.
    ///
    /// After the write the table is trimmed back to `max_entries`, oldest
    /// insertion first.
    pub fn set(&self, key: K, payload: Option<V>, tags: Option<Vec<String>>) -> SetOutcome {
        let payload = match payload {
            Some(payload) if !payload.is_pending() => payload,
            _ => {
                self.lock().stats.record_skipped_write();
                debug!("Skipped caching an empty or pending payload");
                return SetOutcome::Skipped;
            }
        };
        let tags = tags.unwrap_or_else(|| payload.tags());
        let now = self.clock.now_ms();

        let mut guard = self.lock();
        let table = &mut *guard;

        // Replacement drops the old slot so the key becomes the newest
        table.remove(&key);
        let seq = table.order.push(key.clone());
        table.entries.insert(
            key,
            Slot {
                seq,
                entry: CacheEntry::new(payload, tags, now),
            },
        );

        let mut evicted = 0;
        while table.entries.len() > self.config.max_entries {
            let Some(oldest) = table.order.pop_oldest() else {
                break;
            };
            table.entries.remove(&oldest);
            table.stats.record_eviction();
            evicted += 1;
        }
        if evicted > 0 {
            debug!(
                evicted,
                max_entries = self.config.max_entries,
                "Evicted oldest cache entries"
            );
        }

        table.stats.set_total_entries(table.entries.len());
        SetOutcome::Stored { evicted }
    }

    // == Invalidate Tag ==
    /// Removes every entry tagged with `tag` and returns how many went.
    ///
    /// Scans the whole table; tags are not indexed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let mut guard = self.lock();
        let CacheTable {
            entries,
            order,
            stats,
        } = &mut *guard;

        let before = entries.len();
        entries.retain(|_, slot| {
            if slot.entry.has_tag(tag) {
                order.remove(slot.seq);
                false
            } else {
                true
            }
        });
        let removed = before - entries.len();

        stats.record_invalidations(removed);
        stats.set_total_entries(entries.len());
        if removed > 0 {
            debug!(tag, removed, "Invalidated cache entries by tag");
        }
        removed
    }

    // == Delete ==
    /// Removes a single entry. Returns false if the key was not present.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.lock();
        let removed = guard.remove(key).is_some();
        let len = guard.entries.len();
        guard.stats.set_total_entries(len);
        removed
    }

    // == Contains Key ==
    /// Returns true if `key` holds a fresh entry.
    ///
    /// Unlike `get`, this never removes anything or touches the counters.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now_ms();
        self.lock()
            .entries
            .get(key)
            .is_some_and(|slot| !slot.entry.is_expired(now, self.config.ttl_millis))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let table = self.lock();
        let mut stats = table.stats.clone();
        stats.set_total_entries(table.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// discovered by a `get`.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Keys from oldest to newest insertion.
    pub fn keys_in_order(&self) -> Vec<K> {
        self.lock().order.iter().cloned().collect()
    }
}
