//! Division error types.

use std::error::Error;
use std::fmt;

/// Errors from [`divide`](crate::divide).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitDivError {
    /// The divisor was zero.
    DivisionByZero {
        /// The dividend that was being divided.
        dividend: u32,
    },
}

impl fmt::Display for BitDivError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "cannot divide {dividend} by zero"),
        }
    }
}

impl Error for BitDivError {}
