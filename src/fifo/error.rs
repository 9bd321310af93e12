//! Error types for container operations.

use std::fmt;

/// Represents errors that can occur when operating on a
/// [`KvFifo`](super::KvFifo).
///
/// Every error is a deterministic function of the container state and the
/// operation's arguments, so retrying without changing either is never
/// meaningful. Callers can avoid the fallible paths entirely by checking
/// `is_empty` or `count` first.
///
/// # Examples
///
/// ```rust
/// use kvfifo::fifo::{KvFifo, KvFifoError};
///
/// let mut fifo: KvFifo<i32, i32> = KvFifo::new();
/// assert_eq!(fifo.pop(), Err(KvFifoError::EmptyContainer));
/// assert_eq!(fifo.first(&7), Err(KvFifoError::KeyNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KvFifoError {
    /// The operation needs at least one entry, but the container is empty.
    ///
    /// Returned by `pop`, `front`, `front_mut`, `back`, and `back_mut`.
    EmptyContainer,
    /// The operation addresses a key that has no entries.
    ///
    /// Returned by `pop_key`, `move_to_back`, `first`, `first_mut`, `last`,
    /// and `last_mut`. `count` never fails; it reports 0 for absent keys.
    KeyNotFound,
}

impl fmt::Display for KvFifoError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => write!(formatter, "the container is empty"),
            Self::KeyNotFound => write!(formatter, "no entry with the given key"),
        }
    }
}

impl std::error::Error for KvFifoError {}
