//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// A value that is absent from the array is not an error: `search` and
/// `delete` report it as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested initial capacity was zero.
    InvalidCapacity {
        /// The capacity that was asked for.
        requested: usize,
    },
    /// A positional read outside the live range `[0, len)`.
    IndexOutOfBounds {
        /// The index that was asked for.
        index: usize,
        /// Number of live values at the time of the call.
        len: usize,
    },
    /// Slot storage could not be allocated, or its size overflows.
    ///
    /// The array is left exactly as it was before the failing call.
    AllocationFailed {
        /// Number of slots the failed allocation asked for.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "invalid capacity {requested}: must be at least 1")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = ArrayError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");

        let err = ArrayError::InvalidCapacity { requested: 0 };
        assert_eq!(err.to_string(), "invalid capacity 0: must be at least 1");
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn Error> = Box::new(ArrayError::AllocationFailed { requested: 64 });
        assert_eq!(err.to_string(), "failed to allocate 64 slots");
    }
}
