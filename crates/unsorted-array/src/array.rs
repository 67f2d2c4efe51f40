//! The capacity-managed unsorted array.
//!
//! [`DynamicArray`] keeps its live values packed in slots `[0, len)` of a
//! [`SlotBuffer`]. Appends that find the buffer full double the capacity;
//! deletions that leave fewer than a quarter of the slots live halve it.
//! The asymmetric thresholds keep alternating add/delete at a boundary from
//! resizing on every call.
//!
//! Deletion is unordered: the last live value is moved into the vacated
//! slot, so removal is O(1) after the search but insertion order is lost.

use std::fmt;

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::iter::Iter;
use crate::metrics::ResizeStats;
use crate::slots::SlotBuffer;

/// A growable, shrinkable, unordered sequence of values.
///
/// # Example
///
/// ```
/// use unsorted_array::DynamicArray;
///
/// let mut array = DynamicArray::new(2)?;
/// array.add("a")?;
/// array.add("b")?;
/// array.add("c")?; // full: capacity doubles to 4
/// assert_eq!(array.capacity(), 4);
///
/// assert_eq!(array.delete(&"a")?, Some("a"));
/// // "c" was moved into the slot "a" left behind.
/// assert_eq!(array.get(0)?, &"c");
/// assert_eq!(array.to_string(), "[c, b]");
/// # Ok::<(), unsorted_array::ArrayError>(())
/// ```
#[derive(Clone)]
pub struct DynamicArray<V> {
    slots: SlotBuffer<V>,
    /// Number of live values; they occupy slots `[0, len)`.
    len: usize,
    stats: ResizeStats,
}

impl<V> DynamicArray<V> {
    /// Create an empty array with `initial_capacity` slots.
    ///
    /// Returns `ArrayError::InvalidCapacity` if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize) -> Result<Self, ArrayError> {
        Self::with_config(&ArrayConfig::new(initial_capacity))
    }

    /// Create an empty array from a validated [`ArrayConfig`].
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let slots = SlotBuffer::try_new(config.initial_capacity)?;
        Ok(Self {
            slots,
            len: 0,
            stats: ResizeStats::new(config.initial_capacity),
        })
    }

    /// Append `value` after the last live value.
    ///
    /// If every slot is live, capacity doubles first. The larger buffer is
    /// allocated before any value moves, so on `AllocationFailed` the array
    /// is unchanged and `value` is dropped.
    pub fn add(&mut self, value: V) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.slots.put(self.len, value);
        self.len += 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Shared reference to the value at `index`.
    ///
    /// Returns `ArrayError::IndexOutOfBounds` unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&V, ArrayError> {
        self.slots
            .get(index)
            .filter(|_| index < self.len)
            .ok_or(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Resize activity since construction.
    pub fn resize_stats(&self) -> ResizeStats {
        self.stats
    }

    /// Forward iterator over the live values in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Index of the first live value equal to `value`, if any.
    pub fn search(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.slots.position(self.len, value)
    }

    /// Whether any live value equals `value`.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.search(value).is_some()
    }

    /// Remove the first live value equal to `value` and return it.
    ///
    /// Returns `Ok(None)` without touching the array when no value matches.
    /// Otherwise the last live value takes the removed value's slot, and if
    /// fewer than a quarter of the slots remain live the capacity halves
    /// (never below [`ArrayConfig::MIN_CAPACITY`]). The smaller buffer is
    /// allocated before the removal, so on `AllocationFailed` the array is
    /// unchanged.
    pub fn delete(&mut self, value: &V) -> Result<Option<V>, ArrayError>
    where
        V: PartialEq,
    {
        let Some(index) = self.search(value) else {
            return Ok(None);
        };

        let shrink_into = if ArrayConfig::should_shrink(self.len - 1, self.capacity()) {
            Some(SlotBuffer::try_new(ArrayConfig::shrunk(self.capacity()))?)
        } else {
            None
        };

        let removed = self.swap_remove(index);
        if let Some(next) = shrink_into {
            self.relocate(next);
            self.stats.record_shrink();
        }
        self.debug_check_invariants();
        Ok(removed)
    }

    /// Take the value at `index` and fill the hole with the last live value.
    fn swap_remove(&mut self, index: usize) -> Option<V> {
        self.len -= 1;
        let removed = self.slots.take(index);
        if index != self.len {
            if let Some(last) = self.slots.take(self.len) {
                self.slots.put(index, last);
            }
        }
        removed
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity =
            ArrayConfig::grown(self.capacity()).ok_or(ArrayError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.relocate(SlotBuffer::try_new(new_capacity)?);
        self.stats.record_growth(new_capacity);
        Ok(())
    }

    /// Move the live values into `next` and make it the backing storage.
    fn relocate(&mut self, mut next: SlotBuffer<V>) {
        self.slots.migrate_into(&mut next, self.len);
        self.slots = next;
    }

    fn debug_check_invariants(&self) {
        debug_assert!(self.capacity() >= ArrayConfig::MIN_CAPACITY);
        debug_assert!(self.len <= self.capacity());
        debug_assert!(
            (0..self.len).all(|i| self.slots.get(i).is_some()),
            "live prefix has a hole"
        );
        debug_assert_eq!(self.slots.occupied(), self.len, "value past the live prefix");
    }
}

impl<'a, V> IntoIterator for &'a DynamicArray<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the live values as `[a, b, c]`.
impl<V: fmt::Display> fmt::Display for DynamicArray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<V: fmt::Debug> fmt::Debug for DynamicArray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
