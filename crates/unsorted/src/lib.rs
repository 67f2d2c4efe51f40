//! Unsorted: a capacity-managed unordered array.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use unsorted::prelude::*;
//!
//! let mut array = DynamicArray::new(10)?;
//! for v in 0..11 {
//!     array.add(v)?;
//! }
//! assert_eq!(array.capacity(), 20);
//! assert_eq!(array.search(&7), Some(7));
//!
//! array.delete(&0)?;
//! assert_eq!(array.len(), 10);
//! assert_eq!(array.search(&0), None);
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `unsorted-array` | `DynamicArray`, config, errors, resize stats |
//! | [`bitdiv`] | `unsorted-bitdiv` | Shift-and-subtract integer division |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The unsorted array and its support types (`unsorted-array`).
pub use unsorted_array as array;

/// Shift-and-subtract integer division (`unsorted-bitdiv`).
pub use unsorted_bitdiv as bitdiv;

/// Common imports.
///
/// ```rust
/// use unsorted::prelude::*;
/// ```
pub mod prelude {
    pub use unsorted_array::{ArrayConfig, ArrayError, DynamicArray, ResizeStats};
    pub use unsorted_bitdiv::{divide, BitDivError};
}
