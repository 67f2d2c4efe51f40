//! Benchmark workloads for the unsorted workspace.
//!
//! The workloads live here rather than in the bench files so they can be
//! unit-tested: a benchmark that silently stops resizing measures nothing.

#![forbid(unsafe_code)]

use unsorted_array::{ArrayError, DynamicArray};

/// Append `0..count` to a fresh array of the given capacity.
pub fn fill(capacity: usize, count: u64) -> Result<DynamicArray<u64>, ArrayError> {
    let mut array = DynamicArray::new(capacity)?;
    for v in 0..count {
        array.add(v)?;
    }
    Ok(array)
}

/// Alternate one add and one delete across the growth boundary `rounds` times.
///
/// Starts from an array filled exactly to `capacity`, so the first add
/// doubles it. With the quarter-occupancy shrink threshold the capacity
/// must then stay put for the rest of the churn.
pub fn boundary_churn(capacity: usize, rounds: u64) -> Result<DynamicArray<u64>, ArrayError> {
    let mut array = fill(capacity, capacity as u64)?;
    let extra = capacity as u64;
    for _ in 0..rounds {
        array.add(extra)?;
        array.delete(&extra)?;
    }
    Ok(array)
}

/// Fill to `count` then delete every value, front to back.
pub fn drain(capacity: usize, count: u64) -> Result<DynamicArray<u64>, ArrayError> {
    let mut array = fill(capacity, count)?;
    for v in 0..count {
        array.delete(&v)?;
    }
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_resizes_once() {
        let array = boundary_churn(16, 100).unwrap();
        let stats = array.resize_stats();
        assert_eq!(stats.growth_events, 1);
        assert_eq!(stats.shrink_events, 0);
        assert_eq!(array.capacity(), 32);
    }

    #[test]
    fn drain_empties_array() {
        let array = drain(4, 100).unwrap();
        assert!(array.is_empty());
        assert!(array.resize_stats().shrink_events > 0);
    }
}
