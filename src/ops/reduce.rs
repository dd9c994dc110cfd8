//! Reductions: dot products, norms, sums and argmax.
//!
//! None of these write to their inputs. An empty window (`n == 0`) gives zero,
//! or `None` for [`iamax`].

use crate::backend::{ComplexLevel1, Level1, RealLevel1};
use crate::config::{BinaryOpts, UnaryOpts};
use crate::dispatch::{self, Operation};
use crate::error::BlasError;
use num_traits::Zero;

/// Real dot product.
pub fn dot<T: RealLevel1>(x: &[T], y: &[T], opts: &BinaryOpts) -> Result<T, BlasError> {
    let call = dispatch::select(Operation::Dot, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    if !call.begin(&r) {
        return Ok(T::zero());
    }
    Ok(T::dot(&r.view(0, x), &r.view(1, y)))
}

/// Complex dot product without conjugation: `sum x_i * y_i`.
pub fn dotu<T: ComplexLevel1>(x: &[T], y: &[T], opts: &BinaryOpts) -> Result<T, BlasError> {
    let call = dispatch::select(Operation::Dotu, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    if !call.begin(&r) {
        return Ok(T::zero());
    }
    Ok(T::dotu(&r.view(0, x), &r.view(1, y)))
}

/// Complex dot product conjugating `x`: `sum conj(x_i) * y_i`.
pub fn dotc<T: ComplexLevel1>(x: &[T], y: &[T], opts: &BinaryOpts) -> Result<T, BlasError> {
    let call = dispatch::select(Operation::Dotc, T::PRECISION)?;
    let r = call.resolve_binary(x.len(), y.len(), opts)?;
    if !call.begin(&r) {
        return Ok(T::zero());
    }
    Ok(T::dotc(&r.view(0, x), &r.view(1, y)))
}

/// Euclidean norm; real-typed for complex input.
pub fn nrm2<T: Level1>(x: &[T], opts: &UnaryOpts) -> Result<T::Real, BlasError> {
    let call = dispatch::select(Operation::Nrm2, T::PRECISION)?;
    let r = call.resolve_unary(x.len(), opts)?;
    if !call.begin(&r) {
        return Ok(T::Real::zero());
    }
    Ok(T::nrm2(&r.view(0, x)))
}

/// Sum of magnitudes, `|re| + |im|` per complex element.
pub fn asum<T: Level1>(x: &[T], opts: &UnaryOpts) -> Result<T::Real, BlasError> {
    let call = dispatch::select(Operation::Asum, T::PRECISION)?;
    let r = call.resolve_unary(x.len(), opts)?;
    if !call.begin(&r) {
        return Ok(T::Real::zero());
    }
    Ok(T::asum(&r.view(0, x)))
}

/// Zero-based position, within the window, of the first element of largest
/// magnitude.
pub fn iamax<T: Level1>(x: &[T], opts: &UnaryOpts) -> Result<Option<usize>, BlasError> {
    let call = dispatch::select(Operation::Iamax, T::PRECISION)?;
    let r = call.resolve_unary(x.len(), opts)?;
    if !call.begin(&r) {
        return Ok(None);
    }
    // kernels report BLAS one-based positions
    Ok(T::iamax(&r.view(0, x)).checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn dotu_and_dotc_differ_by_conjugation() {
        let x = [Complex64::new(1.0, 2.0), Complex64::new(3.0, -1.0)];
        let y = [Complex64::new(2.0, 0.0), Complex64::new(0.0, 1.0)];
        let u = dotu(&x, &y, &BinaryOpts::new()).unwrap();
        let c = dotc(&x, &y, &BinaryOpts::new()).unwrap();
        // (1+2i)*2 + (3-i)*i = 2+4i + 1+3i
        assert_eq!(u, Complex64::new(3.0, 7.0));
        // (1-2i)*2 + (3+i)*i = 2-4i + -1+3i
        assert_eq!(c, Complex64::new(1.0, -1.0));
    }

    #[test]
    fn complex_norm_and_sum_are_real() {
        let x = [Complex64::new(3.0, 4.0), Complex64::new(0.0, -12.0)];
        let n: f64 = nrm2(&x, &UnaryOpts::new()).unwrap();
        assert_relative_eq!(n, 13.0, epsilon = 1e-12);
        assert_eq!(asum(&x, &UnaryOpts::new()).unwrap(), 19.0);
        assert_eq!(iamax(&x, &UnaryOpts::new()).unwrap(), Some(1));
    }

    #[test]
    fn empty_window_reductions() {
        let x = [1.0f64, 2.0];
        let opts = BinaryOpts::new().n(0);
        assert_eq!(dot(&x, &x, &opts).unwrap(), 0.0);
        assert_eq!(iamax(&x, &UnaryOpts::new().n(0)).unwrap(), None);
        assert_eq!(nrm2(&x, &UnaryOpts::new().n(0)).unwrap(), 0.0);
    }
}
