//! Key-addressable FIFO container with copy-on-write clones.
//!
//! This module provides [`KvFifo`], a queue of key/value entries that keeps
//! strict insertion order while also supporting O(log n) key addressing and
//! O(1) cloning with copy-on-write storage:
//!
//! - [`KvFifo`]: the container itself
//! - [`KvFifoError`]: the error type for fallible operations
//! - [`KvFifoIterator`], [`KvFifoIntoIterator`]: FIFO-order entry iteration
//! - [`KvFifoKeyIterator`]: ascending iteration over the distinct keys
//!
//! # Copy-on-Write
//!
//! Clones share the underlying storage behind a reference-counted pointer.
//! The first mutation on an instance whose storage is shared privatizes it
//! with a deep copy, so clones are O(1) and divergence costs O(n) exactly
//! once. Mutable value accessors (`front_mut` and friends) additionally mark
//! the instance as having an outstanding value reference; a clone taken in
//! that window copies eagerly instead of sharing.
//!
//! # Examples
//!
//! ```rust
//! use kvfifo::fifo::KvFifo;
//!
//! let mut fifo = KvFifo::new();
//! fifo.push("b", 2);
//! fifo.push("a", 1);
//! fifo.push("b", 4);
//!
//! // FIFO order is preserved across keys
//! let entries: Vec<(&&str, &i32)> = fifo.iter().collect();
//! assert_eq!(entries, vec![(&"b", &2), (&"a", &1), (&"b", &4)]);
//!
//! // Keys iterate in ascending order
//! let keys: Vec<&&str> = fifo.keys().collect();
//! assert_eq!(keys, vec![&"a", &"b"]);
//!
//! // Key addressing
//! assert_eq!(fifo.first(&"b"), Ok((&"b", &2)));
//! assert_eq!(fifo.last(&"b"), Ok((&"b", &4)));
//! assert_eq!(fifo.count(&"b"), 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which allows
/// containers to move across threads at slightly higher refcount cost.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod index;
mod kvfifo;
mod queue;

pub use error::KvFifoError;
pub use kvfifo::KvFifo;
pub use kvfifo::KvFifoIntoIterator;
pub use kvfifo::KvFifoIterator;
pub use kvfifo::KvFifoKeyIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
