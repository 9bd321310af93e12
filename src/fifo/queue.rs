//! FIFO entry queue backed by a slot arena.
//!
//! [`EntryQueue`] stores entries in a `Vec` of slots threaded by an intrusive
//! doubly-linked list, giving O(1) append, O(1) removal at any position, and
//! O(1) relocation to the back. Removed slots are recycled through an
//! intrusive free list.
//!
//! Positions are slot indices rather than pointers. An index stays valid
//! until its entry is removed, no matter what happens to other entries, and
//! a field-by-field clone of the queue preserves every stored index, so
//! structures that reference positions survive a deep copy without any
//! fix-up pass.

use super::ReferenceCounter;

/// Stable position of an entry in the slot arena.
pub(crate) type EntryIndex = usize;

/// A single key/value entry plus its FIFO links.
///
/// The key is a handle to the canonical key object owned by the key index;
/// entries never store their own copy of the key.
pub(crate) struct Entry<K, V> {
    pub(crate) key: ReferenceCounter<K>,
    pub(crate) value: V,
    previous: Option<EntryIndex>,
    next: Option<EntryIndex>,
}

// Written out so cloning never requires `K: Clone`; the key handle is a
// refcount bump.
impl<K, V: Clone> Clone for Entry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: ReferenceCounter::clone(&self.key),
            value: self.value.clone(),
            previous: self.previous,
            next: self.next,
        }
    }
}

enum Slot<K, V> {
    Occupied(Entry<K, V>),
    Vacant { next_free: Option<EntryIndex> },
}

impl<K, V: Clone> Clone for Slot<K, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Occupied(entry) => Self::Occupied(entry.clone()),
            Self::Vacant { next_free } => Self::Vacant {
                next_free: *next_free,
            },
        }
    }
}

/// FIFO sequence of entries with stable positions.
///
/// Invariants: `head`/`tail` and the per-entry links always describe one
/// well-formed chain visiting every occupied slot exactly once; `length` is
/// the number of occupied slots; every vacant slot is on the free list.
pub(crate) struct EntryQueue<K, V> {
    slots: Vec<Slot<K, V>>,
    head: Option<EntryIndex>,
    tail: Option<EntryIndex>,
    next_free: Option<EntryIndex>,
    length: usize,
}

impl<K, V: Clone> Clone for EntryQueue<K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            head: self.head,
            tail: self.tail,
            next_free: self.next_free,
            length: self.length,
        }
    }
}

impl<K, V> EntryQueue<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            next_free: None,
            length: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Position of the front entry, if any.
    pub(crate) const fn front(&self) -> Option<EntryIndex> {
        self.head
    }

    /// Position of the back entry, if any.
    pub(crate) const fn back(&self) -> Option<EntryIndex> {
        self.tail
    }

    /// The position the next `push_back` will occupy.
    ///
    /// Pure, so a caller can record the position elsewhere before the entry
    /// exists.
    pub(crate) fn next_position(&self) -> EntryIndex {
        self.next_free.unwrap_or(self.slots.len())
    }

    pub(crate) fn entry(&self, index: EntryIndex) -> &Entry<K, V> {
        match &self.slots[index] {
            Slot::Occupied(entry) => entry,
            Slot::Vacant { .. } => unreachable!("queue position refers to a vacant slot"),
        }
    }

    pub(crate) fn entry_mut(&mut self, index: EntryIndex) -> &mut Entry<K, V> {
        match &mut self.slots[index] {
            Slot::Occupied(entry) => entry,
            Slot::Vacant { .. } => unreachable!("queue position refers to a vacant slot"),
        }
    }

    /// Position of the entry after `index` in FIFO order, if any.
    pub(crate) fn successor(&self, index: EntryIndex) -> Option<EntryIndex> {
        self.entry(index).next
    }

    /// Appends an entry at the back and returns its position.
    ///
    /// Does not run any user code, so it cannot unwind; the returned
    /// position equals `next_position()` taken beforehand.
    pub(crate) fn push_back(&mut self, key: ReferenceCounter<K>, value: V) -> EntryIndex {
        let entry = Entry {
            key,
            value,
            previous: self.tail,
            next: None,
        };
        let index = match self.next_free {
            Some(free) => {
                self.next_free = match &self.slots[free] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list refers to an occupied slot"),
                };
                self.slots[free] = Slot::Occupied(entry);
                free
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.entry_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
        index
    }

    /// Detaches the entry at `index` from the FIFO links without freeing
    /// its slot.
    fn unlink(&mut self, index: EntryIndex) {
        let (previous, next) = {
            let entry = self.entry(index);
            (entry.previous, entry.next)
        };
        match previous {
            Some(previous) => self.entry_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.entry_mut(next).previous = previous,
            None => self.tail = previous,
        }
    }

    /// Removes the entry at `index`, returning its slot to the free list.
    pub(crate) fn remove(&mut self, index: EntryIndex) {
        self.unlink(index);
        self.slots[index] = Slot::Vacant {
            next_free: self.next_free,
        };
        self.next_free = Some(index);
        self.length -= 1;
    }

    /// Relocates the entry at `index` to the back of the queue.
    ///
    /// The entry keeps its position; only the FIFO links change.
    pub(crate) fn move_to_back(&mut self, index: EntryIndex) {
        if self.tail == Some(index) {
            return;
        }
        self.unlink(index);
        let tail = self.tail;
        {
            let entry = self.entry_mut(index);
            entry.previous = tail;
            entry.next = None;
        }
        match tail {
            Some(tail) => self.entry_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }
}
