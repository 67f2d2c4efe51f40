//! Test utilities for unsorted development.
//!
//! - [`fill_consecutive`] appends a run of consecutive integers.
//! - [`DropCounter`] and [`Tracked`] account for every value an array
//!   takes ownership of, so tests can check each one is dropped once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{fill_consecutive, filled_array, DropCounter, Tracked};
