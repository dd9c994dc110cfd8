//! Argument checks shared by every strided operation.

use crate::error::BlasError;

/// Resolve an increment, defaulting to 1. Zero is rejected; either sign is legal.
pub fn check_increment(arg: &'static str, inc: Option<isize>) -> Result<isize, BlasError> {
    match inc.unwrap_or(1) {
        0 => Err(BlasError::InvalidStride { arg }),
        inc => Ok(inc),
    }
}

/// Resolve an offset, defaulting to 0. Requires `0 <= offset < len`.
pub fn check_offset(arg: &'static str, offset: Option<isize>, len: usize) -> Result<usize, BlasError> {
    let offset = offset.unwrap_or(0);
    match usize::try_from(offset) {
        Ok(off) if off < len => Ok(off),
        _ => Err(BlasError::InvalidOffset { arg, offset, len }),
    }
}

/// Check that a window of `n` elements fits: `len - offset > (n - 1) * |inc|`.
///
/// Overflow in the extent computation counts as too short.
pub fn check_extent(
    arg: &'static str,
    len: usize,
    offset: usize,
    n: usize,
    inc: isize,
) -> Result<(), BlasError> {
    if n == 0 {
        return Ok(());
    }
    let fits = (n - 1)
        .checked_mul(inc.unsigned_abs())
        .is_some_and(|span| len.saturating_sub(offset) > span);
    if fits {
        Ok(())
    } else {
        Err(BlasError::VectorTooShort { arg, n, offset, inc, len })
    }
}
