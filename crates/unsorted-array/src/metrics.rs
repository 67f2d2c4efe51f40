//! Resize counters for a single array.

/// Cumulative resize activity of one [`DynamicArray`](crate::DynamicArray).
///
/// Counters only ever increase. They are updated after a resize has fully
/// completed, so a failed allocation leaves them untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeStats {
    /// Number of capacity doublings triggered by `add`.
    pub growth_events: u64,
    /// Number of capacity halvings triggered by `delete`.
    pub shrink_events: u64,
    /// Largest capacity the array has held, in slots.
    pub peak_capacity: usize,
}

impl ResizeStats {
    /// Stats for a freshly constructed array of the given capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            peak_capacity: initial_capacity,
            ..Self::default()
        }
    }

    pub(crate) fn record_growth(&mut self, new_capacity: usize) {
        self.growth_events += 1;
        self.peak_capacity = self.peak_capacity.max(new_capacity);
    }

    pub(crate) fn record_shrink(&mut self) {
        self.shrink_events += 1;
    }

    /// Total number of resize events of either kind.
    pub fn total_resizes(&self) -> u64 {
        self.growth_events + self.shrink_events
    }
}
