//! A capacity-managed, unordered array.
//!
//! [`DynamicArray`] stores values of one type in an owned block of slots
//! and resizes itself to bound wasted memory:
//!
//! - **Growth:** an append that finds every slot live doubles the capacity.
//! - **Shrink:** a deletion that leaves fewer than a quarter of the slots
//!   live halves the capacity, never below one slot.
//! - **Unordered deletion:** the last live value fills the hole left by a
//!   removed one, so deletion never shifts the tail.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<V> (policy: when to grow/shrink, where values go)
//! ├── SlotBuffer<V> (fixed-size Box<[Option<V>]>, swapped on resize)
//! ├── ResizeStats (growth/shrink counters)
//! └── Iter<'_, V> (borrowing cursor, no removal)
//! ```
//!
//! Resizes allocate the replacement buffer before any value moves, so an
//! allocation failure surfaces as [`ArrayError::AllocationFailed`] with the
//! array left as it was.
//!
//! The array does no internal locking. Share it across threads behind a
//! `Mutex` or similar.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod iter;
pub mod metrics;
pub mod slots;

pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use iter::Iter;
pub use metrics::ResizeStats;
