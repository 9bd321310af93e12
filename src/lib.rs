//! # kvfifo
//!
//! A key-addressable FIFO container with copy-on-write clones and ordered
//! key iteration.
//!
//! ## Overview
//!
//! This library provides [`KvFifo`], an in-memory queue of key/value entries
//! that combines three views of the same data:
//!
//! - **FIFO order**: entries keep strict insertion order; `push` appends at
//!   the back, `pop` removes at the front.
//! - **Key addressing**: the earliest and latest entry of any key are
//!   reachable in O(log n), and all entries of a key can be relocated to the
//!   back as one contiguous run.
//! - **Ordered keys**: the distinct keys currently present can be iterated
//!   in ascending order.
//!
//! Cloning a container is O(1): clones share storage and privatize it with a
//! deep copy only on the first divergent mutation (copy-on-write).
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the shared storage pointer.
//!
//! ## Example
//!
//! ```rust
//! use kvfifo::prelude::*;
//!
//! let mut fifo = KvFifo::new();
//! fifo.push("a", 1);
//! fifo.push("b", 2);
//! fifo.push("a", 3);
//!
//! assert_eq!(fifo.front(), Ok((&"a", &1)));
//! assert_eq!(fifo.last(&"a"), Ok((&"a", &3)));
//!
//! let snapshot = fifo.clone(); // O(1), shares storage
//! fifo.pop()?;
//! assert_eq!(fifo.len(), 2);
//! assert_eq!(snapshot.len(), 3); // unaffected by the mutation
//! # Ok::<(), kvfifo::KvFifoError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use kvfifo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::fifo::*;
}

pub mod fifo;

pub use fifo::KvFifo;
pub use fifo::KvFifoError;
