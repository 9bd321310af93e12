//! Key registry and per-key position index.
//!
//! [`KeyIndex`] is one ordered map doing two jobs. Its key set is the
//! registry of distinct keys currently present: the map key is the canonical
//! key object, stored once behind a [`ReferenceCounter`] that every entry
//! handle shares. Its values are the buckets: the FIFO list of queue
//! positions holding that key, front = earliest occurrence.
//!
//! Buckets are never empty. A key enters the map with its first recorded
//! position and leaves it exactly when its last position is taken, so "key
//! is registered" and "key has entries" can never disagree.

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::collections::btree_map;

use super::ReferenceCounter;
use super::queue::EntryIndex;

/// FIFO list of the queue positions holding one key.
pub(crate) type Bucket = VecDeque<EntryIndex>;

/// Ordered map from canonical key to its bucket of queue positions.
pub(crate) struct KeyIndex<K> {
    buckets: BTreeMap<ReferenceCounter<K>, Bucket>,
}

// Written out so cloning never requires `K: Clone`; the map keys are
// refcounted handles and the buckets hold plain indices.
impl<K> Clone for KeyIndex<K> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
        }
    }
}

impl<K> KeyIndex<K> {
    pub(crate) const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Ascending iteration over the canonical keys.
    pub(crate) fn keys(&self) -> btree_map::Keys<'_, ReferenceCounter<K>, Bucket> {
        self.buckets.keys()
    }
}

impl<K: Ord> KeyIndex<K> {
    /// The bucket for `key`, if the key is present.
    pub(crate) fn bucket(&self, key: &K) -> Option<&Bucket> {
        self.buckets.get(key)
    }

    /// Number of entries holding `key`; 0 if the key is absent.
    pub(crate) fn count(&self, key: &K) -> usize {
        self.buckets.get(key).map_or(0, VecDeque::len)
    }

    /// The canonical handle for `key`, if the key is present.
    pub(crate) fn handle(&self, key: &K) -> Option<ReferenceCounter<K>> {
        self.buckets
            .get_key_value(key)
            .map(|(handle, _)| ReferenceCounter::clone(handle))
    }

    /// Appends `position` to `key`'s bucket, registering the key if new.
    ///
    /// All comparisons run before the map is modified, so an unwinding
    /// `Ord::cmp` leaves the index unchanged.
    pub(crate) fn record(&mut self, handle: ReferenceCounter<K>, position: EntryIndex) {
        self.buckets.entry(handle).or_default().push_back(position);
    }

    /// Takes the front position of `key`'s bucket, dropping the bucket (and
    /// deregistering the key) when that was the last position.
    ///
    /// Each map walk either only reads or commits its change atomically, so
    /// an unwinding `Ord::cmp` cannot leave an empty bucket behind.
    pub(crate) fn take_front(&mut self, key: &K) -> Option<EntryIndex> {
        let remaining = self.buckets.get(key).map(VecDeque::len)?;
        if remaining == 1 {
            self.buckets
                .remove(key)
                .and_then(|bucket| bucket.into_iter().next())
        } else {
            self.buckets.get_mut(key).and_then(VecDeque::pop_front)
        }
    }
}
