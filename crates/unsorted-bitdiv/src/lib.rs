//! Integer division using only shifts, comparisons and subtraction.
//!
//! [`divide`] is a binary long division: the divisor is shifted up to the
//! dividend's magnitude, then walked back down one bit at a time,
//! subtracting wherever it fits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::BitDivError;

/// Quotient of `dividend / divisor`, truncated toward zero.
///
/// Returns `BitDivError::DivisionByZero` when `divisor` is zero.
///
/// ```
/// use unsorted_bitdiv::divide;
///
/// assert_eq!(divide(972, 5)?, 194);
/// assert_eq!(divide(1, 2)?, 0);
/// # Ok::<(), unsorted_bitdiv::BitDivError>(())
/// ```
pub fn divide(dividend: u32, divisor: u32) -> Result<u32, BitDivError> {
    if divisor == 0 {
        return Err(BitDivError::DivisionByZero { dividend });
    }
    if dividend < divisor {
        return Ok(0);
    }
    if dividend == divisor {
        return Ok(1);
    }

    // Widened so shifting past the dividend cannot overflow near u32::MAX.
    let mut remainder = u64::from(dividend);
    let mut denom = u64::from(divisor);
    let mut bit: u64 = 1;
    while denom <= remainder {
        denom <<= 1;
        bit <<= 1;
    }
    denom >>= 1;
    bit >>= 1;

    let mut quotient: u64 = 0;
    while bit != 0 {
        if remainder >= denom {
            remainder -= denom;
            quotient |= bit;
        }
        denom >>= 1;
        bit >>= 1;
    }

    // quotient <= dividend, so it always fits.
    Ok(quotient as u32)
}
