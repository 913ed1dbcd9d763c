//! Insertion Order Module
//!
//! Tracks the order in which keys were inserted for FIFO eviction.

use std::collections::BTreeMap;

// == Insertion Order ==
/// Tracks insertion order for FIFO eviction.
///
/// Every insert hands out a new, strictly increasing sequence number. The
/// smallest live sequence belongs to the oldest key. Re-inserting a key means
/// dropping its old sequence and pushing it again, which makes it the newest.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    /// Keys by insertion sequence
    slots: BTreeMap<u64, K>,
    /// Next sequence to hand out
    next_seq: u64,
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty order tracker.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // == Push ==
    /// Records `key` as the newest entry and returns its sequence.
    pub fn push(&mut self, key: K) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.insert(seq, key);
        seq
    }

    // == Remove ==
    /// Removes the slot for `seq`, returning its key if it was live.
    pub fn remove(&mut self, seq: u64) -> Option<K> {
        self.slots.remove(&seq)
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.slots.pop_first().map(|(_, key)| key)
    }

    // == Peek Oldest ==
    /// Returns the oldest key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.slots.first_key_value().map(|(_, key)| key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.slots.values()
    }
}
