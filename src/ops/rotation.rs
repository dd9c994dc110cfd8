//! Givens and modified Givens rotations.
//!
//! `rot` and `rotm` leave the caller's buffers alone and return rotated
//! copies; the `_in_place` variants write the caller's buffers instead.

use crate::backend::{Level1, RealLevel1};
use crate::config::BinaryOpts;
use crate::core::view::StridedViewMut;
use crate::dispatch::{self, Buffer, Operation, Staged};
use crate::error::BlasError;

/// Givens rotation parameters `(c, s)` for the pair `(a, b)`.
///
/// For complex input `c` is real and `s` complex. The rotated value `r` and
/// the reconstruction parameter `z` are not returned.
pub fn rotg<T: Level1>(a: T, b: T) -> Result<(T::Real, T), BlasError> {
    let call = dispatch::select(Operation::Rotg, T::PRECISION)?;
    call.begin_scalar();
    Ok(T::rotg(a, b))
}

/// Modified Givens parameters `[flag, h11, h21, h12, h22]`.
pub fn rotmg<T: RealLevel1>(d1: T, d2: T, x1: T, y1: T) -> Result<[T; 5], BlasError> {
    let call = dispatch::select(Operation::Rotmg, T::PRECISION)?;
    call.begin_scalar();
    Ok(T::rotmg(d1, d2, x1, y1))
}

/// Stage `x` and `y` as `op`'s table row says and run `kernel` over them.
fn rotate<'a, T: Level1>(
    op: Operation,
    x: Buffer<'a, T>,
    y: Buffer<'a, T>,
    opts: &BinaryOpts,
    kernel: impl FnOnce(&mut StridedViewMut<'_, T>, &mut StridedViewMut<'_, T>),
) -> Result<(Staged<'a, T>, Staged<'a, T>), BlasError> {
    let call = dispatch::select(op, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    let mut xs = call.stage(0, x);
    let mut ys = call.stage(1, y);
    if call.begin(&r) {
        kernel(&mut r.view_mut(0, xs.as_mut_slice()), &mut r.view_mut(1, ys.as_mut_slice()));
    }
    Ok((xs, ys))
}

/// Apply the plane rotation `(c, s)` to copies of `x` and `y`.
///
/// Complex vectors take a real cosine and sine. Elements outside the
/// resolved windows are copied through unchanged.
pub fn rot<T: Level1>(
    x: &[T],
    y: &[T],
    c: T::Real,
    s: T::Real,
    opts: &BinaryOpts,
) -> Result<(Vec<T>, Vec<T>), BlasError> {
    let (x, y) = rotate(Operation::Rot, Buffer::Shared(x), Buffer::Shared(y), opts, |x, y| {
        T::rot(x, y, c, s)
    })?;
    Ok((x.into_vec(), y.into_vec()))
}

/// [`rot`] writing into the caller's buffers.
pub fn rot_in_place<T: Level1>(
    x: &mut [T],
    y: &mut [T],
    c: T::Real,
    s: T::Real,
    opts: &BinaryOpts,
) -> Result<(), BlasError> {
    rotate(Operation::RotInPlace, Buffer::Exclusive(x), Buffer::Exclusive(y), opts, |x, y| {
        T::rot(x, y, c, s)
    })?;
    Ok(())
}

/// Apply a modified Givens transform to copies of `x` and `y`.
///
/// When `n` is not given it defaults to `(len(x) - offx) / |incx|`, which is
/// one less than the other operations use whenever the buffer does not end on
/// a full stride.
pub fn rotm<T: RealLevel1>(
    x: &[T],
    y: &[T],
    param: &[T; 5],
    opts: &BinaryOpts,
) -> Result<(Vec<T>, Vec<T>), BlasError> {
    let (x, y) = rotate(Operation::Rotm, Buffer::Shared(x), Buffer::Shared(y), opts, |x, y| {
        T::rotm(x, y, param)
    })?;
    Ok((x.into_vec(), y.into_vec()))
}

/// [`rotm`] writing into the caller's buffers.
pub fn rotm_in_place<T: RealLevel1>(
    x: &mut [T],
    y: &mut [T],
    param: &[T; 5],
    opts: &BinaryOpts,
) -> Result<(), BlasError> {
    rotate(Operation::RotmInPlace, Buffer::Exclusive(x), Buffer::Exclusive(y), opts, |x, y| {
        T::rotm(x, y, param)
    })?;
    Ok(())
}
