//! Fixed-size slot storage backing a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`SlotBuffer`] is an owned, contiguous block of `Option<V>` slots whose
//! length never changes after allocation. Resizing an array means allocating
//! a fresh buffer and migrating values into it; the buffer itself has no
//! growth policy.

use crate::error::ArrayError;

/// An owned block of `capacity` slots, each empty or holding one value.
#[derive(Clone)]
pub struct SlotBuffer<V> {
    slots: Box<[Option<V>]>,
}

impl<V> SlotBuffer<V> {
    /// Allocate `capacity` empty slots.
    ///
    /// Returns `ArrayError::AllocationFailed` if the allocator refuses the
    /// request or the byte size overflows, instead of aborting.
    pub fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared reference to the value in slot `index`, if it holds one.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Store `value` in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn put(&mut self, index: usize, value: V) {
        debug_assert!(self.slots[index].is_none(), "slot {index} already occupied");
        self.slots[index] = Some(value);
    }

    /// Move the value out of slot `index`, leaving it empty.
    pub fn take(&mut self, index: usize) -> Option<V> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Move the first `live` values into the same positions of `dst`.
    ///
    /// Afterwards every slot of `self` is empty. `dst` must have at least
    /// `live` slots and those slots must be empty.
    pub fn migrate_into(&mut self, dst: &mut SlotBuffer<V>, live: usize) {
        debug_assert!(live <= dst.capacity());
        for (from, to) in self.slots[..live].iter_mut().zip(dst.slots.iter_mut()) {
            debug_assert!(to.is_none());
            *to = from.take();
        }
    }

    /// Index of the first slot in `[0, live)` whose value equals `value`.
    pub fn position(&self, live: usize, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.slots[..live]
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Number of occupied slots across the whole buffer.
    ///
    /// Linear in capacity; used for invariant checks.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
