//! Portable reference kernels.
//!
//! These follow the reference BLAS algorithms and operate on already
//! validated views. They are generic over the element type; the precision
//! specific entry points in [`super`] instantiate them.

use crate::core::traits::{ComplexScalar, RealScalar, Scalar};
use crate::core::view::{StridedView, StridedViewMut};
use num_traits::{Float, One, Zero};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Contiguous reductions at least this long run on the rayon pool.
#[cfg(feature = "rayon")]
pub const PAR_THRESHOLD: usize = 1 << 14;

/// Givens parameters for real `a`, `b`: `(c, s)` with `r = sign(roe) * hypot(a, b)`.
pub fn rotg_real<R: RealScalar>(a: R, b: R) -> (R, R) {
    let (abs_a, abs_b) = (a.abs(), b.abs());
    let roe = if abs_a > abs_b { a } else { b };
    let scale = abs_a + abs_b;
    if scale == R::zero() {
        return (R::one(), R::zero());
    }
    let (sa, sb) = (a / scale, b / scale);
    let mut r = scale * (sa * sa + sb * sb).sqrt();
    if roe < R::zero() {
        r = -r;
    }
    (a / r, b / r)
}

/// Givens parameters for complex `a`, `b`: real cosine, complex sine.
pub fn rotg_complex<T: ComplexScalar>(a: T, b: T) -> (T::Real, T) {
    let abs_a = a.modulus();
    if abs_a == T::Real::zero() {
        return (T::Real::zero(), T::one());
    }
    let abs_b = b.modulus();
    let scale = abs_a + abs_b;
    let (sa, sb) = (abs_a / scale, abs_b / scale);
    let norm = scale * (sa * sa + sb * sb).sqrt();
    let alpha = a.mul_real(abs_a.recip());
    (abs_a / norm, (alpha * b.conj()).mul_real(norm.recip()))
}

/// Modified Givens setup. Returns `[flag, h11, h21, h12, h22]`.
///
/// Entries implied by the flag (unit or zero) are written as zero.
pub fn rotmg<R: RealScalar>(d1: R, d2: R, x1: R, y1: R) -> [R; 5] {
    let zero = R::zero();
    let one = R::one();
    let gam = R::lit(4096.0);
    let gamsq = R::lit(16_777_216.0);
    let rgamsq = R::lit(5.960_464_477_539_063e-8);

    let (mut d1, mut d2) = (d1, d2);
    let (mut h11, mut h12, mut h21, mut h22) = (zero, zero, zero, zero);
    let mut flag;

    if d1 < zero {
        flag = -one;
    } else {
        let p2 = d2 * y1;
        if p2 == zero {
            return [R::lit(-2.0), zero, zero, zero, zero];
        }
        let p1 = d1 * x1;
        let q2 = p2 * y1;
        let q1 = p1 * x1;

        if q1.abs() > q2.abs() {
            h21 = -y1 / x1;
            h12 = p2 / p1;
            let u = one - h12 * h21;
            if u > zero {
                flag = zero;
                d1 = d1 / u;
                d2 = d2 / u;
            } else {
                flag = -one;
                (h12, h21) = (zero, zero);
                d1 = zero;
                d2 = zero;
            }
        } else if q2 < zero {
            flag = -one;
            d1 = zero;
            d2 = zero;
        } else {
            flag = one;
            h11 = p1 / p2;
            h22 = x1 / y1;
            let u = one + h11 * h22;
            let tmp = d2 / u;
            d2 = d1 / u;
            d1 = tmp;
        }

        // Promote to the full matrix before rescaling touches the implied entries.
        let to_full = |flag: &mut R, h11: &mut R, h12: &mut R, h21: &mut R, h22: &mut R| {
            if *flag == zero {
                *h11 = one;
                *h22 = one;
            } else if *flag == one {
                *h21 = -one;
                *h12 = one;
            }
            *flag = -one;
        };

        if d1 != zero {
            while d1 <= rgamsq || d1 >= gamsq {
                to_full(&mut flag, &mut h11, &mut h12, &mut h21, &mut h22);
                if d1 <= rgamsq {
                    d1 = d1 * gamsq;
                    h11 = h11 / gam;
                    h12 = h12 / gam;
                } else {
                    d1 = d1 / gamsq;
                    h11 = h11 * gam;
                    h12 = h12 * gam;
                }
            }
        }
        if d2 != zero {
            while d2.abs() <= rgamsq || d2.abs() >= gamsq {
                to_full(&mut flag, &mut h11, &mut h12, &mut h21, &mut h22);
                if d2.abs() <= rgamsq {
                    d2 = d2 * gamsq;
                    h21 = h21 / gam;
                    h22 = h22 / gam;
                } else {
                    d2 = d2 / gamsq;
                    h21 = h21 * gam;
                    h22 = h22 * gam;
                }
            }
        }
    }

    if flag < zero {
        [flag, h11, h21, h12, h22]
    } else if flag == zero {
        [flag, zero, h21, h12, zero]
    } else {
        [flag, h11, zero, zero, h22]
    }
}

/// Apply a plane rotation with real `c`, `s`.
pub fn rot<T: Scalar>(x: &mut StridedViewMut<'_, T>, y: &mut StridedViewMut<'_, T>, c: T::Real, s: T::Real) {
    for i in 0..x.len() {
        let (xi, yi) = (x.get(i), y.get(i));
        x.set(i, xi.mul_real(c) + yi.mul_real(s));
        y.set(i, yi.mul_real(c) - xi.mul_real(s));
    }
}

/// Apply a modified Givens transform `[flag, h11, h21, h12, h22]`.
pub fn rotm<R: RealScalar>(x: &mut StridedViewMut<'_, R>, y: &mut StridedViewMut<'_, R>, param: &[R; 5]) {
    let [flag, h11, h21, h12, h22] = *param;
    let zero = R::zero();
    if flag == R::lit(-2.0) {
        return;
    }
    for i in 0..x.len() {
        let (w, z) = (x.get(i), y.get(i));
        let (xn, yn) = if flag < zero {
            (w * h11 + z * h12, w * h21 + z * h22)
        } else if flag == zero {
            (w + z * h12, w * h21 + z)
        } else {
            (w * h11 + z, -w + h22 * z)
        };
        x.set(i, xn);
        y.set(i, yn);
    }
}

pub fn swap<T: Scalar>(x: &mut StridedViewMut<'_, T>, y: &mut StridedViewMut<'_, T>) {
    for i in 0..x.len() {
        let tmp = x.get(i);
        x.set(i, y.get(i));
        y.set(i, tmp);
    }
}

pub fn scal<T: Scalar>(alpha: T, x: &mut StridedViewMut<'_, T>) {
    if let Some(xs) = x.as_contiguous_mut() {
        xs.iter_mut().for_each(|v| *v = alpha * *v);
        return;
    }
    for i in 0..x.len() {
        x.update(i, |v| alpha * v);
    }
}

/// Scale by a real factor (complex vectors only in the dispatch table).
pub fn scal_real<T: Scalar>(alpha: T::Real, x: &mut StridedViewMut<'_, T>) {
    for i in 0..x.len() {
        x.update(i, |v| v.mul_real(alpha));
    }
}

pub fn copy<T: Scalar>(x: &StridedView<'_, T>, y: &mut StridedViewMut<'_, T>) {
    if let (Some(xs), Some(ys)) = (x.as_contiguous(), y.as_contiguous_mut()) {
        ys.copy_from_slice(xs);
        return;
    }
    for i in 0..x.len() {
        y.set(i, x.get(i));
    }
}

/// `y := alpha * x + y`
pub fn axpy<T: Scalar>(alpha: T, x: &StridedView<'_, T>, y: &mut StridedViewMut<'_, T>) {
    if alpha == T::zero() {
        return;
    }
    for i in 0..x.len() {
        let xi = x.get(i);
        y.update(i, |yi| yi + alpha * xi);
    }
}

/// Sum of `f(x_i) * y_i`, in parallel for long contiguous windows.
fn dot_with<T: Scalar>(x: &StridedView<'_, T>, y: &StridedView<'_, T>, f: fn(T) -> T) -> T {
    #[cfg(feature = "rayon")]
    if let (Some(xs), Some(ys)) = (x.as_contiguous(), y.as_contiguous()) {
        if xs.len() >= PAR_THRESHOLD {
            return xs
                .par_iter()
                .zip(ys.par_iter())
                .map(|(&a, &b)| f(a) * b)
                .reduce(T::zero, |acc, v| acc + v);
        }
    }
    x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (a, b)| acc + f(a) * b)
}

/// Unconjugated dot product.
pub fn dotu<T: Scalar>(x: &StridedView<'_, T>, y: &StridedView<'_, T>) -> T {
    dot_with(x, y, |a| a)
}

/// Dot product conjugating `x`.
pub fn dotc<T: Scalar>(x: &StridedView<'_, T>, y: &StridedView<'_, T>) -> T {
    dot_with(x, y, T::conj)
}

/// Euclidean norm by scaled sum of squares over real and imaginary parts.
pub fn nrm2<T: Scalar>(x: &StridedView<'_, T>) -> T::Real {
    let zero = T::Real::zero();
    let mut scale = zero;
    let mut ssq = T::Real::one();
    for v in x.iter() {
        for part in [v.re(), v.im()] {
            if part == zero {
                continue;
            }
            let a = part.abs();
            if scale < a {
                let q = scale / a;
                ssq = T::Real::one() + ssq * q * q;
                scale = a;
            } else {
                let q = a / scale;
                ssq = ssq + q * q;
            }
        }
    }
    scale * ssq.sqrt()
}

/// Sum of `|re| + |im|`.
pub fn asum<T: Scalar>(x: &StridedView<'_, T>) -> T::Real {
    #[cfg(feature = "rayon")]
    if let Some(xs) = x.as_contiguous() {
        if xs.len() >= PAR_THRESHOLD {
            return xs
                .par_iter()
                .map(|v| v.abs1())
                .reduce(T::Real::zero, |acc, v| acc + v);
        }
    }
    x.iter().fold(T::Real::zero(), |acc, v| acc + v.abs1())
}

/// One-based index of the first element with the largest `|re| + |im|`; 0 when empty.
pub fn iamax<T: Scalar>(x: &StridedView<'_, T>) -> usize {
    let mut best = 0;
    let mut max = T::Real::zero();
    for (i, v) in x.iter().enumerate() {
        let m = v.abs1();
        if best == 0 || m > max {
            best = i + 1;
            max = m;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use num_complex::Complex64;

    #[test]
    fn rotg_real_zeroes_second_component() {
        let (c, s) = rotg_real(3.0f64, 4.0);
        assert_relative_eq!(c, 0.6, epsilon = 1e-12);
        assert_relative_eq!(s, 0.8, epsilon = 1e-12);
        // sign follows the larger input
        let (c, s) = rotg_real(-3.0f64, 4.0);
        assert_relative_eq!(c, -0.6, epsilon = 1e-12);
        assert_relative_eq!(s, 0.8, epsilon = 1e-12);
        let (c, s) = rotg_real(-4.0f64, 3.0);
        assert_relative_eq!(c, 0.8, epsilon = 1e-12);
        assert_relative_eq!(s, -0.6, epsilon = 1e-12);
        assert_eq!(rotg_real(0.0f32, 0.0), (1.0, 0.0));
    }

    #[test]
    fn rotg_complex_matches_real_on_real_axis() {
        let (c, s) = rotg_complex(Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0));
        assert_relative_eq!(c, 0.6, epsilon = 1e-12);
        assert_relative_eq!(s.re, 0.8, epsilon = 1e-12);
        assert_relative_eq!(s.im, 0.0, epsilon = 1e-12);
        let (c, s) = rotg_complex(Complex64::new(0.0, 0.0), Complex64::new(1.0, 2.0));
        assert_eq!(c, 0.0);
        assert_eq!(s, Complex64::new(1.0, 0.0));
    }

    #[test]
    fn rotmg_flag_one_branch() {
        assert_eq!(rotmg(1.0f64, 1.0, 1.0, 1.0), [1.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotmg_degenerate_inputs() {
        assert_eq!(rotmg(1.0f64, 0.0, 1.0, 1.0)[0], -2.0);
        assert_eq!(rotmg(-1.0f64, 1.0, 1.0, 1.0), [-1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rotmg_flag_zero_branch() {
        // |d1 x1^2| > |d2 y1^2|
        let p = rotmg(4.0f64, 1.0, 2.0, 1.0);
        assert_eq!(p[0], 0.0);
        assert_relative_eq!(p[2], -0.5, epsilon = 1e-12);
        assert_relative_eq!(p[3], 1.0 / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn rotmg_rescales_small_weight() {
        // d2 / u lands below 1/gam^2, so row two is rescaled by gam
        let p = rotmg(1e-10f64, 1.0, 1.0, 1e-3);
        assert_eq!(p[0], -1.0);
        assert_relative_eq!(p[1], 1e-7, max_relative = 1e-12);
        assert_relative_eq!(p[2], -1.0 / 4096.0, max_relative = 1e-12);
        assert_eq!(p[3], 1.0);
        assert_relative_eq!(p[4], 1000.0 / 4096.0, max_relative = 1e-12);

        let (mut x, mut y) = ([1.0f64], [1e-3f64]);
        rotm(
            &mut StridedViewMut::new(&mut x[..], 1, 1),
            &mut StridedViewMut::new(&mut y[..], 1, 1),
            &p,
        );
        assert_abs_diff_eq!(y[0], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn rotmg_rescales_large_weight() {
        // d1 / u exceeds gam^2, so row one is rescaled by gam
        let p = rotmg(1e8f64, 1.0, 1.0, 1.0);
        assert_eq!(p[0], -1.0);
        let (mut x, mut y) = ([1.0f64], [1.0f64]);
        rotm(
            &mut StridedViewMut::new(&mut x[..], 1, 1),
            &mut StridedViewMut::new(&mut y[..], 1, 1),
            &p,
        );
        assert_abs_diff_eq!(y[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn nrm2_avoids_overflow() {
        let big = [3.0e300f64, 4.0e300];
        let v = StridedView::new(&big[..], 2, 1);
        assert_relative_eq!(nrm2(&v), 5.0e300, max_relative = 1e-14);
    }

    #[test]
    fn iamax_keeps_first_maximum() {
        let x = [1.0f32, -3.0, 3.0, 2.0];
        assert_eq!(iamax(&StridedView::new(&x[..], 4, 1)), 2);
        assert_eq!(iamax(&StridedView::new(&x[..], 0, 1)), 0);
    }
}
