//! Vector updates: swap, scale, copy and axpy.

use crate::backend::{ComplexLevel1, Level1};
use crate::config::{BinaryOpts, UnaryOpts};
use crate::dispatch::{self, Buffer, Operation};
use crate::error::BlasError;

/// Exchange the windows of `x` and `y` in place.
pub fn swap<T: Level1>(x: &mut [T], y: &mut [T], opts: &BinaryOpts) -> Result<(), BlasError> {
    let call = dispatch::select(Operation::Swap, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    let mut xs = call.stage(0, Buffer::Exclusive(x));
    let mut ys = call.stage(1, Buffer::Exclusive(y));
    if call.begin(&r) {
        T::swap(&mut r.view_mut(0, xs.as_mut_slice()), &mut r.view_mut(1, ys.as_mut_slice()));
    }
    Ok(())
}

/// `x := alpha * x` in place.
pub fn scal<T: Level1>(alpha: T, x: &mut [T], opts: &UnaryOpts) -> Result<(), BlasError> {
    let call = dispatch::select(Operation::Scal, T::PRECISION)?;
    let r = call.resolve_unary(x.len(), opts)?;
    let mut xs = call.stage(0, Buffer::Exclusive(x));
    if call.begin(&r) {
        T::scal(alpha, &mut r.view_mut(0, xs.as_mut_slice()));
    }
    Ok(())
}

/// Scale a complex vector by a real factor, returning a scaled copy.
pub fn scal_real<T: ComplexLevel1>(alpha: T::Real, x: &[T], opts: &UnaryOpts) -> Result<Vec<T>, BlasError> {
    let call = dispatch::select(Operation::ScalReal, T::PRECISION)?;
    let r = call.resolve_unary(x.len(), opts)?;
    let mut xs = call.stage(0, Buffer::Shared(x));
    if call.begin(&r) {
        T::scal_real(alpha, &mut r.view_mut(0, xs.as_mut_slice()));
    }
    Ok(xs.into_vec())
}

/// Copy the window of `x` into the window of `y`.
pub fn copy<T: Level1>(x: &[T], y: &mut [T], opts: &BinaryOpts) -> Result<(), BlasError> {
    let call = dispatch::select(Operation::Copy, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    let mut ys = call.stage(1, Buffer::Exclusive(y));
    if call.begin(&r) {
        T::copy(&r.view(0, x), &mut r.view_mut(1, ys.as_mut_slice()));
    }
    Ok(())
}

/// `y := a * x + y`. `a` defaults to one.
pub fn axpy<T: Level1>(a: Option<T>, x: &[T], y: &mut [T], opts: &BinaryOpts) -> Result<(), BlasError> {
    let call = dispatch::select(Operation::Axpy, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    let mut ys = call.stage(1, Buffer::Exclusive(y));
    if call.begin(&r) {
        T::axpy(a.unwrap_or_else(T::one), &r.view(0, x), &mut r.view_mut(1, ys.as_mut_slice()));
    }
    Ok(())
}
