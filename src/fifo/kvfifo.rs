//! Key-addressable FIFO container with copy-on-write clones.
//!
//! This module provides [`KvFifo`], a queue of key/value entries that keeps
//! strict insertion order while supporting O(log n) addressing of the
//! earliest/latest entry per key, ascending key iteration, and O(1) clones
//! with copy-on-write storage.
//!
//! # Internal Structure
//!
//! A container is a reference-counted pointer to a [`State`]: an
//! [`EntryQueue`] (slot arena threaded by an intrusive FIFO list) plus a
//! [`KeyIndex`] (ordered map from canonical key to the FIFO bucket of queue
//! positions holding it). The two structures are always co-owned and cloned
//! together. The following holds before and after every public operation:
//!
//! 1. every entry's key handle refers to a key registered in the index;
//! 2. a key's bucket lists exactly the positions of that key's entries, in
//!    queue order, and is never empty;
//! 3. bucket lengths sum to the queue length.
//!
//! # Copy-on-Write
//!
//! `clone` is an O(1) refcount bump. A mutating operation on an instance
//! whose state is shared first privatizes it with a deep copy; queue
//! positions are arena indices, so the copy needs no handle fix-up. Mutable
//! value accessors additionally mark the instance *exposed*: a clone taken
//! from an exposed instance copies eagerly instead of sharing, since the
//! container cannot observe writes through a previously returned value
//! reference. Every successful mutation clears the mark.

use std::cell::Cell;
use std::collections::btree_map;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use super::error::KvFifoError;
use super::index::{Bucket, KeyIndex};
use super::queue::{EntryIndex, EntryQueue};

// =============================================================================
// Container State
// =============================================================================

/// The jointly owned storage: entry queue plus key index.
///
/// `Clone` is the privatization step of the copy-on-write protocol: values
/// clone via `V: Clone`, canonical keys are shared by refcount bump (they
/// are immutable), and every queue position is an arena index, so the
/// copy's cross-links are correct without a rebuild pass. Written out so
/// the bound stays `V: Clone` alone.
struct State<K, V> {
    queue: EntryQueue<K, V>,
    index: KeyIndex<K>,
}

impl<K, V: Clone> Clone for State<K, V> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            index: self.index.clone(),
        }
    }
}

impl<K, V> State<K, V> {
    const fn new() -> Self {
        Self {
            queue: EntryQueue::new(),
            index: KeyIndex::new(),
        }
    }
}

// =============================================================================
// KvFifo Definition
// =============================================================================

/// A key-addressable FIFO container with copy-on-write clones.
///
/// Entries keep strict insertion order. Each entry associates a key with a
/// value; the same key may occur any number of times. Beyond plain queue
/// operations, the container addresses the earliest (`first`) and latest
/// (`last`) entry of a key, relocates all of a key's entries to the back
/// (`move_to_back`), and iterates the distinct keys in ascending order
/// (`keys`).
///
/// # Copy-on-Write
///
/// `clone` shares storage in O(1); the first mutation on either side
/// privatizes it with a deep O(n) copy. `K: Clone` is never required: the
/// canonical key objects are immutable and stay shared across copies.
///
/// # Time Complexity
///
/// | Operation               | Complexity        |
/// |-------------------------|-------------------|
/// | `new`                   | O(1)              |
/// | `push`                  | O(log n)          |
/// | `pop` / `pop_key`       | O(log n)          |
/// | `move_to_back`          | O(log n + m)      |
/// | `front` / `back`        | O(1)              |
/// | `first` / `last`        | O(log n)          |
/// | `len` / `is_empty`      | O(1)              |
/// | `count`                 | O(log n)          |
/// | `clear`                 | O(1) (*)          |
/// | `clone`                 | O(1), O(n) if exposed |
///
/// m = number of entries holding the key. (*) plus dropping the old state
/// when this instance was its last owner. Any mutating call pays O(n) once
/// when it must privatize shared storage.
///
/// # Thread Safety
///
/// No internal synchronization is provided. With the default `Rc` storage
/// the container is neither `Send` nor `Sync`; with the `arc` feature it is
/// `Send` but still not `Sync`, and instances sharing storage must not be
/// mutated from separate threads without external synchronization.
///
/// # Examples
///
/// ```rust
/// use kvfifo::fifo::KvFifo;
///
/// let mut fifo = KvFifo::new();
/// fifo.push(3, "three");
/// fifo.push(1, "one");
/// fifo.push(3, "THREE");
///
/// assert_eq!(fifo.front(), Ok((&3, &"three")));
/// assert_eq!(fifo.first(&3), Ok((&3, &"three")));
/// assert_eq!(fifo.last(&3), Ok((&3, &"THREE")));
/// assert_eq!(fifo.count(&3), 2);
///
/// let keys: Vec<&i32> = fifo.keys().collect();
/// assert_eq!(keys, vec![&1, &3]);
///
/// fifo.pop()?;
/// assert_eq!(fifo.front(), Ok((&1, &"one")));
/// # Ok::<(), kvfifo::KvFifoError>(())
/// ```
pub struct KvFifo<K, V> {
    state: ReferenceCounter<State<K, V>>,
    exposed: Cell<bool>,
}

// =============================================================================
// Construction and Size
// =============================================================================

impl<K, V> KvFifo<K, V> {
    /// Creates an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let fifo: KvFifo<String, i32> = KvFifo::new();
    /// assert!(fifo.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ReferenceCounter::new(State::new()),
            exposed: Cell::new(false),
        }
    }

    /// Number of entries in the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.queue.len()
    }

    /// Returns `true` if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.queue.is_empty()
    }

    /// Removes every entry by installing a fresh empty state.
    ///
    /// Instances sharing the old storage keep it untouched, so `clear` never
    /// needs to privatize anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// fifo.clear();
    /// assert!(fifo.is_empty());
    /// assert_eq!(fifo.count(&"a"), 0);
    /// ```
    pub fn clear(&mut self) {
        self.state = ReferenceCounter::new(State::new());
        self.exposed.set(false);
    }

    /// The key and value of the front (earliest) entry.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::EmptyContainer`] if the container is empty.
    pub fn front(&self) -> Result<(&K, &V), KvFifoError> {
        let position = self
            .state
            .queue
            .front()
            .ok_or(KvFifoError::EmptyContainer)?;
        let entry = self.state.queue.entry(position);
        Ok((entry.key.as_ref(), &entry.value))
    }

    /// The key and value of the back (latest) entry.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::EmptyContainer`] if the container is empty.
    pub fn back(&self) -> Result<(&K, &V), KvFifoError> {
        let position = self.state.queue.back().ok_or(KvFifoError::EmptyContainer)?;
        let entry = self.state.queue.entry(position);
        Ok((entry.key.as_ref(), &entry.value))
    }

    /// Iterates the entries in FIFO order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("b", 2);
    /// fifo.push("a", 1);
    ///
    /// let entries: Vec<(&&str, &i32)> = fifo.iter().collect();
    /// assert_eq!(entries, vec![(&"b", &2), (&"a", &1)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> KvFifoIterator<'_, K, V> {
        KvFifoIterator {
            queue: &self.state.queue,
            next: self.state.queue.front(),
            remaining: self.state.queue.len(),
        }
    }

    /// Iterates the distinct keys in ascending order.
    ///
    /// The view is read-only and reflects the keys present when it was
    /// created; call `keys` again to restart. A key appears exactly once no
    /// matter how many entries hold it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("cherry", 3);
    /// fifo.push("apple", 1);
    /// fifo.push("cherry", 4);
    ///
    /// let keys: Vec<&&str> = fifo.keys().collect();
    /// assert_eq!(keys, vec![&"apple", &"cherry"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> KvFifoKeyIterator<'_, K> {
        KvFifoKeyIterator {
            keys: self.state.index.keys(),
        }
    }
}

// =============================================================================
// Keyed Reads
// =============================================================================

impl<K: Ord, V> KvFifo<K, V> {
    /// Number of entries holding `key`; 0 if the key is absent.
    ///
    /// Never fails.
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.state.index.count(key)
    }

    /// The canonical key and value of the earliest entry holding `key`.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    pub fn first(&self, key: &K) -> Result<(&K, &V), KvFifoError> {
        let position = self
            .state
            .index
            .bucket(key)
            .and_then(|bucket| bucket.front().copied())
            .ok_or(KvFifoError::KeyNotFound)?;
        let entry = self.state.queue.entry(position);
        Ok((entry.key.as_ref(), &entry.value))
    }

    /// The canonical key and value of the latest entry holding `key`.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    pub fn last(&self, key: &K) -> Result<(&K, &V), KvFifoError> {
        let position = self
            .state
            .index
            .bucket(key)
            .and_then(|bucket| bucket.back().copied())
            .ok_or(KvFifoError::KeyNotFound)?;
        let entry = self.state.queue.entry(position);
        Ok((entry.key.as_ref(), &entry.value))
    }
}

// =============================================================================
// Mutable Value Accessors
// =============================================================================

impl<K, V: Clone> KvFifo<K, V> {
    /// Privatizes shared storage before a mutation or a mutable borrow.
    ///
    /// A no-op when this instance is the sole owner. If the deep copy
    /// unwinds (a panicking `V::clone`), the shared state stays installed
    /// and unchanged.
    fn make_exclusive(&mut self) -> &mut State<K, V> {
        ReferenceCounter::make_mut(&mut self.state)
    }

    /// Like [`front`](Self::front), but the value is borrowed mutably.
    ///
    /// Privatizes shared storage and marks this instance exposed: a clone
    /// taken before the next mutation will copy eagerly instead of sharing.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::EmptyContainer`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// let (_, value) = fifo.front_mut()?;
    /// *value = 10;
    /// assert_eq!(fifo.front(), Ok((&"a", &10)));
    /// # Ok::<(), kvfifo::KvFifoError>(())
    /// ```
    pub fn front_mut(&mut self) -> Result<(&K, &mut V), KvFifoError> {
        let position = self
            .state
            .queue
            .front()
            .ok_or(KvFifoError::EmptyContainer)?;
        // Exposed only once the privatizing copy has succeeded; the second
        // call sees exclusive state and does not copy.
        self.make_exclusive();
        self.exposed.set(true);
        let entry = self.make_exclusive().queue.entry_mut(position);
        Ok((entry.key.as_ref(), &mut entry.value))
    }

    /// Like [`back`](Self::back), but the value is borrowed mutably.
    ///
    /// Privatizes shared storage and marks this instance exposed.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::EmptyContainer`] if the container is empty.
    pub fn back_mut(&mut self) -> Result<(&K, &mut V), KvFifoError> {
        let position = self.state.queue.back().ok_or(KvFifoError::EmptyContainer)?;
        self.make_exclusive();
        self.exposed.set(true);
        let entry = self.make_exclusive().queue.entry_mut(position);
        Ok((entry.key.as_ref(), &mut entry.value))
    }
}

impl<K: Ord, V: Clone> KvFifo<K, V> {
    /// Like [`first`](Self::first), but the value is borrowed mutably.
    ///
    /// Privatizes shared storage and marks this instance exposed.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    pub fn first_mut(&mut self, key: &K) -> Result<(&K, &mut V), KvFifoError> {
        let position = self
            .state
            .index
            .bucket(key)
            .and_then(|bucket| bucket.front().copied())
            .ok_or(KvFifoError::KeyNotFound)?;
        self.make_exclusive();
        self.exposed.set(true);
        let entry = self.make_exclusive().queue.entry_mut(position);
        Ok((entry.key.as_ref(), &mut entry.value))
    }

    /// Like [`last`](Self::last), but the value is borrowed mutably.
    ///
    /// Privatizes shared storage and marks this instance exposed.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    pub fn last_mut(&mut self, key: &K) -> Result<(&K, &mut V), KvFifoError> {
        let position = self
            .state
            .index
            .bucket(key)
            .and_then(|bucket| bucket.back().copied())
            .ok_or(KvFifoError::KeyNotFound)?;
        self.make_exclusive();
        self.exposed.set(true);
        let entry = self.make_exclusive().queue.entry_mut(position);
        Ok((entry.key.as_ref(), &mut entry.value))
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<K: Ord, V: Clone> KvFifo<K, V> {
    /// Appends an entry at the back of the queue.
    ///
    /// The key is registered if new; otherwise the entry shares the
    /// already-stored canonical key object and the passed `key` is dropped.
    ///
    /// The update is staged so that everything that can unwind (a user
    /// `Ord::cmp` or the privatizing deep copy) runs before the first
    /// structural commit; a panic anywhere leaves the container observably
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// fifo.push("a", 2);
    /// assert_eq!(fifo.len(), 2);
    /// assert_eq!(fifo.count(&"a"), 2);
    /// ```
    pub fn push(&mut self, key: K, value: V) {
        let state = self.make_exclusive();
        let handle = match state.index.handle(&key) {
            Some(handle) => handle,
            None => ReferenceCounter::new(key),
        };
        // The index records the reserved position before the queue commits
        // it; no fallible code runs in between.
        let position = state.queue.next_position();
        state.index.record(ReferenceCounter::clone(&handle), position);
        let linked = state.queue.push_back(handle, value);
        debug_assert_eq!(linked, position);
        self.exposed.set(false);
    }

    /// Removes the front entry.
    ///
    /// Equivalent to `pop_key` with the front entry's key.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::EmptyContainer`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// fifo.push("b", 2);
    /// fifo.pop()?;
    /// assert_eq!(fifo.front(), Ok((&"b", &2)));
    /// # Ok::<(), kvfifo::KvFifoError>(())
    /// ```
    pub fn pop(&mut self) -> Result<(), KvFifoError> {
        let front = self
            .state
            .queue
            .front()
            .ok_or(KvFifoError::EmptyContainer)?;
        let key = ReferenceCounter::clone(&self.state.queue.entry(front).key);
        self.pop_key(&key)
    }

    /// Removes the earliest entry holding `key`.
    ///
    /// The key is deregistered when its last entry is removed. The existence
    /// check precedes any privatization, so a failed call never copies.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// fifo.push("b", 2);
    /// fifo.push("a", 3);
    ///
    /// fifo.pop_key(&"a")?;
    /// assert_eq!(fifo.first(&"a"), Ok((&"a", &3)));
    /// assert_eq!(fifo.front(), Ok((&"b", &2)));
    /// # Ok::<(), kvfifo::KvFifoError>(())
    /// ```
    pub fn pop_key(&mut self, key: &K) -> Result<(), KvFifoError> {
        if self.state.index.count(key) == 0 {
            return Err(KvFifoError::KeyNotFound);
        }
        let state = self.make_exclusive();
        let position = state.index.take_front(key).ok_or(KvFifoError::KeyNotFound)?;
        state.queue.remove(position);
        self.exposed.set(false);
        Ok(())
    }

    /// Relocates every entry holding `key` to the back of the queue.
    ///
    /// The moved entries keep their relative order and end up as one
    /// contiguous run at the tail; nothing else reorders. The existence
    /// check precedes any privatization.
    ///
    /// # Errors
    ///
    /// [`KvFifoError::KeyNotFound`] if the key has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvfifo::fifo::KvFifo;
    ///
    /// let mut fifo = KvFifo::new();
    /// fifo.push("a", 1);
    /// fifo.push("b", 2);
    /// fifo.push("a", 3);
    /// fifo.push("c", 4);
    ///
    /// fifo.move_to_back(&"a")?;
    /// let values: Vec<i32> = fifo.iter().map(|(_, value)| *value).collect();
    /// assert_eq!(values, vec![2, 4, 1, 3]);
    /// # Ok::<(), kvfifo::KvFifoError>(())
    /// ```
    pub fn move_to_back(&mut self, key: &K) -> Result<(), KvFifoError> {
        if self.state.index.count(key) == 0 {
            return Err(KvFifoError::KeyNotFound);
        }
        let state = self.make_exclusive();
        let State { queue, index } = state;
        if let Some(bucket) = index.bucket(key) {
            // Bucket order is queue order, so relinking front-to-back keeps
            // the moved run in its original relative order.
            for &position in bucket {
                queue.move_to_back(position);
            }
        }
        self.exposed.set(false);
        Ok(())
    }
}

// =============================================================================
// Copy-on-Write Clone
// =============================================================================

impl<K, V: Clone> Clone for KvFifo<K, V> {
    /// Shares the storage in O(1).
    ///
    /// If `self` has handed out a mutable value reference since its last
    /// mutation (it is *exposed*), the storage is deep-copied eagerly
    /// instead, and both instances leave the exposed state.
    fn clone(&self) -> Self {
        if self.exposed.get() {
            self.exposed.set(false);
            Self {
                state: ReferenceCounter::new((*self.state).clone()),
                exposed: Cell::new(false),
            }
        } else {
            Self {
                state: ReferenceCounter::clone(&self.state),
                exposed: Cell::new(false),
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`KvFifo`] in FIFO order.
pub struct KvFifoIterator<'a, K, V> {
    queue: &'a EntryQueue<K, V>,
    next: Option<EntryIndex>,
    remaining: usize,
}

impl<'a, K, V> Iterator for KvFifoIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.next?;
        let entry = self.queue.entry(position);
        self.next = self.queue.successor(position);
        self.remaining -= 1;
        Some((entry.key.as_ref(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for KvFifoIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> std::iter::FusedIterator for KvFifoIterator<'_, K, V> {}

/// An iterator over the distinct keys of a [`KvFifo`] in ascending order.
pub struct KvFifoKeyIterator<'a, K> {
    keys: btree_map::Keys<'a, ReferenceCounter<K>, Bucket>,
}

impl<'a, K> Iterator for KvFifoKeyIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|handle| handle.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> ExactSizeIterator for KvFifoKeyIterator<'_, K> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K> std::iter::FusedIterator for KvFifoKeyIterator<'_, K> {}

/// An owning iterator over the entries of a [`KvFifo`] in FIFO order.
pub struct KvFifoIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for KvFifoIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for KvFifoIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> std::iter::FusedIterator for KvFifoIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for KvFifo<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Clone> FromIterator<(K, V)> for KvFifo<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fifo = Self::new();
        for (key, value) in iter {
            fifo.push(key, value);
        }
        fifo
    }
}

impl<K: Ord, V: Clone> Extend<(K, V)> for KvFifo<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<K: Clone, V: Clone> IntoIterator for KvFifo<K, V> {
    type Item = (K, V);
    type IntoIter = KvFifoIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        // Keys live behind shared handles, so entries clone out once here.
        let entries: Vec<(K, V)> = self
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        KvFifoIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a KvFifo<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = KvFifoIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for KvFifo<K, V> {
    /// Containers are equal when their entry sequences are equal.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(left, right)| left == right)
    }
}

impl<K: Eq, V: Eq> Eq for KvFifo<K, V> {}

impl<K: Hash, V: Hash> Hash for KvFifo<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KvFifo<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Auto-Trait Posture
// =============================================================================

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(KvFifo<i32, i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(KvFifo<i32, i32>: Send);
#[cfg(feature = "arc")]
static_assertions::assert_not_impl_any!(KvFifo<i32, i32>: Sync);

// =============================================================================
// Tests
// =============================================================================
