//! Reusable array fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use unsorted_array::{ArrayError, DynamicArray};

/// Append `count` consecutive integers starting at `first`.
pub fn fill_consecutive(
    array: &mut DynamicArray<i32>,
    first: i32,
    count: usize,
) -> Result<(), ArrayError> {
    for value in (first..).take(count) {
        array.add(value)?;
    }
    Ok(())
}

/// An array of the given capacity holding `0..count` in order.
pub fn filled_array(capacity: usize, count: usize) -> DynamicArray<i32> {
    let mut array = DynamicArray::new(capacity).expect("fixture capacity must be positive");
    fill_consecutive(&mut array, 0, count).expect("fixture fill failed");
    array
}

/// Shared count of dropped [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropCounter {
    dropped: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value that bumps this counter when dropped.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

/// A non-`Copy` value whose drop is recorded by its [`DropCounter`].
///
/// Equality compares `id` only.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    dropped: Arc<AtomicUsize>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropCounter")
            .field("dropped", &self.dropped())
            .finish()
    }
}
