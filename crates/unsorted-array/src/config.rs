//! Array configuration and resize policy constants.

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Only the starting capacity is tunable. The resize policy itself is
/// fixed and exposed as associated constants so callers and tests can
/// reason about it without reading the implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated at construction.
    ///
    /// Default: 10. Must be at least [`ArrayConfig::MIN_CAPACITY`].
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Capacity never drops below this, however many values are deleted.
    pub const MIN_CAPACITY: usize = 1;

    /// Capacity is multiplied by this when an append finds storage full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity is divided by this on a shrink event.
    pub const SHRINK_DIVISOR: usize = 2;

    /// A shrink happens when fewer than `1 / SHRINK_OCCUPANCY_DENOMINATOR`
    /// of the slots are live after a deletion.
    pub const SHRINK_OCCUPANCY_DENOMINATOR: usize = 4;

    /// Create a config with the given starting capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that the config describes a constructible array.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity < Self::MIN_CAPACITY {
            return Err(ArrayError::InvalidCapacity {
                requested: self.initial_capacity,
            });
        }
        Ok(())
    }

    /// Capacity after a growth event, or `None` on overflow.
    pub fn grown(capacity: usize) -> Option<usize> {
        capacity.checked_mul(Self::GROWTH_FACTOR)
    }

    /// Capacity after a shrink event, clamped to [`Self::MIN_CAPACITY`].
    pub fn shrunk(capacity: usize) -> usize {
        (capacity / Self::SHRINK_DIVISOR).max(Self::MIN_CAPACITY)
    }

    /// Whether `len` live values in `capacity` slots is sparse enough to shrink.
    ///
    /// Compared exactly (`len / capacity < 1/4`), not with truncating division,
    /// so small capacities still shrink down to the floor.
    pub fn should_shrink(len: usize, capacity: usize) -> bool {
        capacity > Self::MIN_CAPACITY
            && len.saturating_mul(Self::SHRINK_OCCUPANCY_DENOMINATOR) < capacity
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
