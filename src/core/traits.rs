//! Element traits for blas1.
//!
//! [`Scalar`] covers every supported element type; [`RealScalar`] and
//! [`ComplexScalar`] split them by kind so kernels that only exist for one
//! kind can say so in their bounds.

use crate::core::precision::Precision;
use num_complex::Complex;
use num_traits::{Float, One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A vector element: `f32`, `f64`, `Complex<f32>` or `Complex<f64>`.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Real type of the same width (`Self` for real types).
    type Real: RealScalar;
    /// Tag used to select the kernel entry point.
    const PRECISION: Precision;

    fn conj(self) -> Self;
    fn re(self) -> Self::Real;
    fn im(self) -> Self::Real;
    /// Multiply by a real factor.
    fn mul_real(self, r: Self::Real) -> Self;

    /// BLAS magnitude `|re| + |im|`, used by `asum` and `iamax`.
    fn abs1(self) -> Self::Real {
        self.re().abs() + self.im().abs()
    }

    /// Euclidean modulus.
    fn modulus(self) -> Self::Real {
        self.re().hypot(self.im())
    }
}

/// Real element types.
pub trait RealScalar: Scalar<Real = Self> + Float {
    /// Convert an `f64` literal, rounding for `f32`.
    fn lit(v: f64) -> Self;
}

/// Complex element types.
pub trait ComplexScalar: Scalar {}

macro_rules! impl_real_scalar {
    ($t:ty, $tag:ident) => {
        impl Scalar for $t {
            type Real = $t;
            const PRECISION: Precision = Precision::$tag;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn re(self) -> Self {
                self
            }
            #[inline]
            fn im(self) -> Self {
                0.0
            }
            #[inline]
            fn mul_real(self, r: Self) -> Self {
                self * r
            }
            #[inline]
            fn abs1(self) -> Self {
                self.abs()
            }
            #[inline]
            fn modulus(self) -> Self {
                self.abs()
            }
        }

        impl RealScalar for $t {
            #[inline]
            fn lit(v: f64) -> Self {
                v as $t
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($t:ty, $tag:ident) => {
        impl Scalar for Complex<$t> {
            type Real = $t;
            const PRECISION: Precision = Precision::$tag;

            #[inline]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }
            #[inline]
            fn re(self) -> $t {
                self.re
            }
            #[inline]
            fn im(self) -> $t {
                self.im
            }
            #[inline]
            fn mul_real(self, r: $t) -> Self {
                Complex::new(self.re * r, self.im * r)
            }
        }

        impl ComplexScalar for Complex<$t> {}
    };
}

impl_real_scalar!(f32, Real32);
impl_real_scalar!(f64, Real64);
impl_complex_scalar!(f32, Complex32);
impl_complex_scalar!(f64, Complex64);

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn complex_magnitudes() {
        let z = Complex64::new(3.0, -4.0);
        assert_eq!(z.abs1(), 7.0);
        assert_eq!(Scalar::modulus(z), 5.0);
        assert_eq!(Scalar::conj(z), Complex64::new(3.0, 4.0));
        assert_eq!(z.mul_real(2.0), Complex64::new(6.0, -8.0));
    }

    #[test]
    fn real_magnitudes() {
        assert_eq!((-2.5f32).abs1(), 2.5);
        assert_eq!(Scalar::im(1.0f64), 0.0);
        assert_eq!(<f32 as Scalar>::PRECISION, Precision::Real32);
        assert_eq!(<Complex<f32> as Scalar>::PRECISION, Precision::Complex32);
    }
}
