//! Cursor iteration over a [`DynamicArray`].
//!
//! [`Iter`] is a stateless cursor: a shared borrow of the array plus the
//! next index to read. It re-reads the live length on every step and holds
//! no snapshot. The borrow means the array cannot be mutated while an
//! iterator is alive, and the type deliberately has no removal method since
//! unordered deletion would reshuffle the slots under the cursor.

use std::iter::FusedIterator;

use crate::array::DynamicArray;

/// Forward iterator over the live values of a [`DynamicArray`], in slot order.
pub struct Iter<'a, V> {
    array: &'a DynamicArray<V>,
    next: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(array: &'a DynamicArray<V>) -> Self {
        Self { array, next: 0 }
    }

    /// Slot index the next call to `next()` will read.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            next: self.next,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let value = self.array.get(self.next).ok()?;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_insertion_order_without_deletions() {
        let mut array = DynamicArray::new(10).unwrap();
        for v in 0..15 {
            array.add(v).unwrap();
        }
        let collected: Vec<i32> = array.iter().copied().collect();
        assert_eq!(collected, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn empty_array_yields_nothing() {
        let array = DynamicArray::<u8>::new(4).unwrap();
        let mut iter = array.iter();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn exact_size_counts_down() {
        let mut array = DynamicArray::new(2).unwrap();
        for v in ['a', 'b', 'c'] {
            array.add(v).unwrap();
        }
        let mut iter = array.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.position(), 1);
    }

    #[test]
    fn fresh_iterators_restart_and_clones_are_independent() {
        let mut array = DynamicArray::new(3).unwrap();
        for v in [1, 2, 3] {
            array.add(v).unwrap();
        }
        let mut first = array.iter();
        first.next();
        let second = first.clone();
        assert_eq!(first.count(), 2);
        assert_eq!(second.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(array.iter().count(), 3);
    }

    #[test]
    fn for_loop_over_reference() {
        let mut array = DynamicArray::new(1).unwrap();
        array.add(4u32).unwrap();
        array.add(6u32).unwrap();
        let mut sum = 0u32;
        for v in &array {
            sum += v;
        }
        assert_eq!(sum, 10);
    }
}
