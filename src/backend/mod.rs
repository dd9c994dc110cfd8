//! Compute backend: precision-specialised Level-1 kernels.
//!
//! The traits here are the calling convention between the dispatcher and the
//! numeric kernels. Every method receives views that have already been
//! validated, so kernels never check bounds or strides themselves.
//!
//! Which trait an element type implements decides which operations exist for
//! it: [`RealLevel1`] only for `f32`/`f64`, [`ComplexLevel1`] only for the
//! complex types. A missing combination fails to compile.

use crate::core::traits::{ComplexScalar, RealScalar, Scalar};
use crate::core::view::{StridedView, StridedViewMut};
use num_complex::Complex;

pub mod reference;

/// Kernels available for every precision.
pub trait Level1: Scalar {
    /// Givens parameters `(c, s)`; `c` is always real.
    fn rotg(a: Self, b: Self) -> (Self::Real, Self);
    /// Plane rotation with real cosine and sine.
    fn rot(x: &mut StridedViewMut<'_, Self>, y: &mut StridedViewMut<'_, Self>, c: Self::Real, s: Self::Real);
    fn swap(x: &mut StridedViewMut<'_, Self>, y: &mut StridedViewMut<'_, Self>);
    fn scal(alpha: Self, x: &mut StridedViewMut<'_, Self>);
    fn copy(x: &StridedView<'_, Self>, y: &mut StridedViewMut<'_, Self>);
    fn axpy(alpha: Self, x: &StridedView<'_, Self>, y: &mut StridedViewMut<'_, Self>);
    /// Plain sum of products, no conjugation.
    fn dotu(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self;
    fn nrm2(x: &StridedView<'_, Self>) -> Self::Real;
    fn asum(x: &StridedView<'_, Self>) -> Self::Real;
    /// One-based index of the largest magnitude, `0` for an empty view.
    fn iamax(x: &StridedView<'_, Self>) -> usize;
}

/// Kernels that only exist for real precisions.
pub trait RealLevel1: Level1 + RealScalar {
    fn rotmg(d1: Self, d2: Self, x1: Self, y1: Self) -> [Self; 5];
    fn rotm(x: &mut StridedViewMut<'_, Self>, y: &mut StridedViewMut<'_, Self>, param: &[Self; 5]);
    fn dot(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self;
}

/// Kernels that only exist for complex precisions.
pub trait ComplexLevel1: Level1 + ComplexScalar {
    fn dotc(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self;
    /// Scale by a real factor.
    fn scal_real(alpha: Self::Real, x: &mut StridedViewMut<'_, Self>);
}

macro_rules! impl_level1 {
    ($t:ty, $rotg:path) => {
        impl Level1 for $t {
            #[inline]
            fn rotg(a: Self, b: Self) -> (Self::Real, Self) {
                $rotg(a, b)
            }
            #[inline]
            fn rot(
                x: &mut StridedViewMut<'_, Self>,
                y: &mut StridedViewMut<'_, Self>,
                c: Self::Real,
                s: Self::Real,
            ) {
                reference::rot(x, y, c, s)
            }
            #[inline]
            fn swap(x: &mut StridedViewMut<'_, Self>, y: &mut StridedViewMut<'_, Self>) {
                reference::swap(x, y)
            }
            #[inline]
            fn scal(alpha: Self, x: &mut StridedViewMut<'_, Self>) {
                reference::scal(alpha, x)
            }
            #[inline]
            fn copy(x: &StridedView<'_, Self>, y: &mut StridedViewMut<'_, Self>) {
                reference::copy(x, y)
            }
            #[inline]
            fn axpy(alpha: Self, x: &StridedView<'_, Self>, y: &mut StridedViewMut<'_, Self>) {
                reference::axpy(alpha, x, y)
            }
            #[inline]
            fn dotu(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self {
                reference::dotu(x, y)
            }
            #[inline]
            fn nrm2(x: &StridedView<'_, Self>) -> Self::Real {
                reference::nrm2(x)
            }
            #[inline]
            fn asum(x: &StridedView<'_, Self>) -> Self::Real {
                reference::asum(x)
            }
            #[inline]
            fn iamax(x: &StridedView<'_, Self>) -> usize {
                reference::iamax(x)
            }
        }
    };
}

macro_rules! impl_real_level1 {
    ($t:ty) => {
        impl_level1!($t, reference::rotg_real);

        impl RealLevel1 for $t {
            #[inline]
            fn rotmg(d1: Self, d2: Self, x1: Self, y1: Self) -> [Self; 5] {
                reference::rotmg(d1, d2, x1, y1)
            }
            #[inline]
            fn rotm(x: &mut StridedViewMut<'_, Self>, y: &mut StridedViewMut<'_, Self>, param: &[Self; 5]) {
                reference::rotm(x, y, param)
            }
            #[inline]
            fn dot(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self {
                reference::dotu(x, y)
            }
        }
    };
}

macro_rules! impl_complex_level1 {
    ($t:ty) => {
        impl_level1!(Complex<$t>, reference::rotg_complex);

        impl ComplexLevel1 for Complex<$t> {
            #[inline]
            fn dotc(x: &StridedView<'_, Self>, y: &StridedView<'_, Self>) -> Self {
                reference::dotc(x, y)
            }
            #[inline]
            fn scal_real(alpha: $t, x: &mut StridedViewMut<'_, Self>) {
                reference::scal_real(alpha, x)
            }
        }
    };
}

impl_real_level1!(f32);
impl_real_level1!(f64);
impl_complex_level1!(f32);
impl_complex_level1!(f64);
