//! Per-call options for vector arguments.
//!
//! Every field is optional. Missing values are filled in by the resolver:
//! `inc` defaults to 1, `offset` to 0, and `n` to the longest window the first
//! buffer can hold.

/// Offset and increment of one vector argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecOpts {
    /// Index of the first element of the window in the buffer.
    pub offset: Option<isize>,
    /// Distance between consecutive elements; negative walks backward.
    pub inc: Option<isize>,
}

impl VecOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: isize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn inc(mut self, inc: isize) -> Self {
        self.inc = Some(inc);
        self
    }
}

/// Options for single-vector operations (`scal`, `nrm2`, `asum`, `iamax`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnaryOpts {
    /// Logical vector length.
    pub n: Option<usize>,
    pub x: VecOpts,
}

impl UnaryOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    pub fn offx(mut self, offset: isize) -> Self {
        self.x.offset = Some(offset);
        self
    }

    pub fn incx(mut self, inc: isize) -> Self {
        self.x.inc = Some(inc);
        self
    }
}

/// Options for two-vector operations. `n` is shared by both vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryOpts {
    /// Logical vector length, defaulted from `x` when absent.
    pub n: Option<usize>,
    pub x: VecOpts,
    pub y: VecOpts,
}

impl BinaryOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    pub fn offx(mut self, offset: isize) -> Self {
        self.x.offset = Some(offset);
        self
    }

    pub fn incx(mut self, inc: isize) -> Self {
        self.x.inc = Some(inc);
        self
    }

    pub fn offy(mut self, offset: isize) -> Self {
        self.y.offset = Some(offset);
        self
    }

    pub fn incy(mut self, inc: isize) -> Self {
        self.y.inc = Some(inc);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_only_named_fields() {
        let o = BinaryOpts::new().n(3).incx(-1).offy(2);
        assert_eq!(o.n, Some(3));
        assert_eq!(o.x, VecOpts { offset: None, inc: Some(-1) });
        assert_eq!(o.y, VecOpts::new().offset(2));
        assert_eq!(UnaryOpts::default().n, None);
    }
}
