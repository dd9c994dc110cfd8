//! Parameter resolver: derive and validate strided windows.
//!
//! One routine serves every operation. It takes the caller's buffers (by
//! length) and optional overrides, and produces a shared length `n` plus one
//! validated [`Window`] per buffer. Nothing is touched until all buffers have
//! passed.
//!
//! Order of checks, per buffer in argument order: increment, then offset.
//! The default `n` comes from the first buffer only; afterwards every buffer
//! is checked to hold `n` elements.

use crate::config::{BinaryOpts, UnaryOpts, VecOpts};
use crate::core::view::{StridedView, StridedViewMut};
use crate::error::BlasError;
use crate::utils::checks::{check_extent, check_increment, check_offset};

/// How the default length is derived from the first buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// `n = (len - offset - 1) / |inc| + 1`: every element the window can reach.
    Inclusive,
    /// `n = (len - offset) / |inc|`, used by `rotm` only. Can come out one
    /// short of [`LengthRule::Inclusive`].
    Exclusive,
}

impl LengthRule {
    /// Default `n` for a buffer whose offset has already been validated.
    pub fn default_len(self, len: usize, offset: usize, inc: isize) -> usize {
        let step = inc.unsigned_abs();
        let room = len - offset;
        match self {
            LengthRule::Inclusive => (room - 1) / step + 1,
            LengthRule::Exclusive => room / step,
        }
    }
}

/// A vector argument as seen by the resolver.
#[derive(Debug, Clone, Copy)]
pub struct Operand {
    /// Name reported in errors.
    pub name: &'static str,
    pub len: usize,
    pub opts: VecOpts,
}

impl Operand {
    pub fn new(name: &'static str, len: usize, opts: VecOpts) -> Self {
        Self { name, len, opts }
    }
}

/// Validated offset and increment of one buffer.
///
/// Only the resolver builds these, so a view taken through one never indexes
/// past its buffer. Code outside the crate can neither build nor edit one:
///
/// ```compile_fail
/// let w = blas1::resolve::Window { offset: 7, inc: 1 };
/// ```
///
/// ```compile_fail
/// use blas1::{LengthRule, UnaryOpts};
/// let mut r = blas1::resolve::resolve_unary(LengthRule::Inclusive, 4, &UnaryOpts::new()).unwrap();
/// r.n = 100;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub(crate) offset: usize,
    pub(crate) inc: isize,
}

impl Window {
    pub(crate) fn view<'a, T: Copy>(&self, n: usize, buf: &'a [T]) -> StridedView<'a, T> {
        StridedView::new(&buf[self.offset..], n, self.inc)
    }

    pub(crate) fn view_mut<'a, T: Copy>(&self, n: usize, buf: &'a mut [T]) -> StridedViewMut<'a, T> {
        StridedViewMut::new(&mut buf[self.offset..], n, self.inc)
    }
}

/// Output of the resolver for `N` buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<const N: usize> {
    pub(crate) n: usize,
    pub(crate) windows: [Window; N],
}

impl<const N: usize> Resolved<N> {
    /// `n == 0`: the kernel must not run.
    pub fn is_noop(&self) -> bool {
        self.n == 0
    }

    pub(crate) fn view<'a, T: Copy>(&self, k: usize, buf: &'a [T]) -> StridedView<'a, T> {
        self.windows[k].view(self.n, buf)
    }

    pub(crate) fn view_mut<'a, T: Copy>(&self, k: usize, buf: &'a mut [T]) -> StridedViewMut<'a, T> {
        self.windows[k].view_mut(self.n, buf)
    }
}

/// Resolve and validate `N` buffers sharing one logical length.
pub fn resolve<const N: usize>(
    rule: LengthRule,
    n: Option<usize>,
    operands: [Operand; N],
) -> Result<Resolved<N>, BlasError> {
    let mut windows = [Window { offset: 0, inc: 1 }; N];
    for (w, op) in windows.iter_mut().zip(&operands) {
        let inc = check_increment(op.name, op.opts.inc)?;
        let offset = check_offset(op.name, op.opts.offset, op.len)?;
        *w = Window { offset, inc };
    }

    let n = match (n, operands.first()) {
        (Some(n), _) => n,
        (None, Some(first)) => rule.default_len(first.len, windows[0].offset, windows[0].inc),
        (None, None) => 0,
    };

    for (w, op) in windows.iter().zip(&operands) {
        check_extent(op.name, op.len, w.offset, n, w.inc)?;
    }
    Ok(Resolved { n, windows })
}

/// Single buffer named `x`.
pub fn resolve_unary(rule: LengthRule, len: usize, opts: &UnaryOpts) -> Result<Resolved<1>, BlasError> {
    resolve(rule, opts.n, [Operand::new("x", len, opts.x)])
}

/// Buffers named `x` and `y`; the default length comes from `x`.
pub fn resolve_binary(
    rule: LengthRule,
    x_len: usize,
    y_len: usize,
    opts: &BinaryOpts,
) -> Result<Resolved<2>, BlasError> {
    resolve(
        rule,
        opts.n,
        [Operand::new("x", x_len, opts.x), Operand::new("y", y_len, opts.y)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_whole_buffer() {
        let r = resolve_unary(LengthRule::Inclusive, 5, &UnaryOpts::new()).unwrap();
        assert_eq!(r.n, 5);
        assert_eq!(r.windows[0], Window { offset: 0, inc: 1 });
    }

    #[test]
    fn inclusive_length_with_stride_and_offset() {
        // len 7, offset 1, |inc| 2 -> touches 1, 3, 5
        let r = resolve_unary(LengthRule::Inclusive, 7, &UnaryOpts::new().offx(1).incx(-2)).unwrap();
        assert_eq!(r.n, 3);
        // len 8 reaches index 7 as well
        let r = resolve_unary(LengthRule::Inclusive, 8, &UnaryOpts::new().offx(1).incx(2)).unwrap();
        assert_eq!(r.n, 4);
    }

    #[test]
    fn exclusive_length_drops_partial_step() {
        assert_eq!(LengthRule::Exclusive.default_len(7, 1, 2), 3);
        assert_eq!(LengthRule::Inclusive.default_len(8, 1, 2), 4);
        assert_eq!(LengthRule::Exclusive.default_len(8, 1, 2), 3);
        assert_eq!(LengthRule::Exclusive.default_len(3, 2, 2), 0);
    }

    #[test]
    fn default_n_taken_from_first_buffer() {
        let err = resolve_binary(LengthRule::Inclusive, 4, 3, &BinaryOpts::new()).unwrap_err();
        assert_eq!(
            err,
            BlasError::VectorTooShort { arg: "y", n: 4, offset: 0, inc: 1, len: 3 }
        );
        let r = resolve_binary(LengthRule::Inclusive, 3, 4, &BinaryOpts::new()).unwrap();
        assert_eq!(r.n, 3);
    }

    #[test]
    fn every_buffer_checked_before_length() {
        // bad stride on y is reported even though x alone would resolve
        let err = resolve_binary(LengthRule::Inclusive, 4, 4, &BinaryOpts::new().incy(0)).unwrap_err();
        assert_eq!(err, BlasError::InvalidStride { arg: "y" });
        let err = resolve_binary(LengthRule::Inclusive, 4, 4, &BinaryOpts::new().offy(9)).unwrap_err();
        assert!(matches!(err, BlasError::InvalidOffset { arg: "y", offset: 9, len: 4 }));
    }

    #[test]
    fn explicit_zero_length_is_noop() {
        let r = resolve_binary(LengthRule::Inclusive, 4, 1, &BinaryOpts::new().n(0)).unwrap();
        assert!(r.is_noop());
    }

    #[test]
    fn boundary_is_inclusive_of_last_element() {
        let ok = resolve_unary(LengthRule::Inclusive, 10, &UnaryOpts::new().n(4).offx(0).incx(3));
        assert!(ok.is_ok()); // last = 0 + 3*3 = 10 - 1
        let err = resolve_unary(LengthRule::Inclusive, 10, &UnaryOpts::new().n(4).offx(1).incx(3));
        assert!(matches!(err, Err(BlasError::VectorTooShort { arg: "x", .. })));
    }
}
