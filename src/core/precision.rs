//! Precision tags and precision sets.
//!
//! A [`Precision`] names the element representation of a buffer and selects
//! the kernel entry point in the dispatch table. A [`PrecisionSet`] is the set
//! of precisions an operation supports.

use bitflags::bitflags;
use std::fmt;

/// Element representation of a vector buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit real (`f32`).
    Real32,
    /// 64-bit real (`f64`).
    Real64,
    /// Complex with 32-bit parts (`Complex<f32>`).
    Complex32,
    /// Complex with 64-bit parts (`Complex<f64>`).
    Complex64,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Real32,
        Precision::Real64,
        Precision::Complex32,
        Precision::Complex64,
    ];

    /// Column of this precision in the dispatch table.
    pub const fn index(self) -> usize {
        match self {
            Precision::Real32 => 0,
            Precision::Real64 => 1,
            Precision::Complex32 => 2,
            Precision::Complex64 => 3,
        }
    }

    /// Size in bytes of one element.
    pub const fn byte_width(self) -> usize {
        match self {
            Precision::Real32 => 4,
            Precision::Real64 | Precision::Complex32 => 8,
            Precision::Complex64 => 16,
        }
    }

    /// Real precision with the same part width (`Complex32` -> `Real32`).
    pub const fn real(self) -> Precision {
        match self {
            Precision::Real32 | Precision::Complex32 => Precision::Real32,
            Precision::Real64 | Precision::Complex64 => Precision::Real64,
        }
    }

    /// Single-bit set containing only this precision.
    pub const fn as_set(self) -> PrecisionSet {
        match self {
            Precision::Real32 => PrecisionSet::REAL32,
            Precision::Real64 => PrecisionSet::REAL64,
            Precision::Complex32 => PrecisionSet::COMPLEX32,
            Precision::Complex64 => PrecisionSet::COMPLEX64,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Precision::Real32 => "real32",
            Precision::Real64 => "real64",
            Precision::Complex32 => "complex32",
            Precision::Complex64 => "complex64",
        };
        f.write_str(s)
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PrecisionSet: u8 {
        const REAL32    = 0b0001;
        const REAL64    = 0b0010;
        const COMPLEX32 = 0b0100;
        const COMPLEX64 = 0b1000;
        const REAL      = Self::REAL32.bits() | Self::REAL64.bits();
        const COMPLEX   = Self::COMPLEX32.bits() | Self::COMPLEX64.bits();
    }
}

impl PrecisionSet {
    pub fn supports(self, precision: Precision) -> bool {
        self.contains(precision.as_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_ordered() {
        for (i, p) in Precision::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn byte_widths_match_rust_types() {
        use num_complex::Complex;
        assert_eq!(Precision::Real32.byte_width(), std::mem::size_of::<f32>());
        assert_eq!(Precision::Real64.byte_width(), std::mem::size_of::<f64>());
        assert_eq!(Precision::Complex32.byte_width(), std::mem::size_of::<Complex<f32>>());
        assert_eq!(Precision::Complex64.byte_width(), std::mem::size_of::<Complex<f64>>());
    }

    #[test]
    fn set_membership() {
        assert!(PrecisionSet::COMPLEX.supports(Precision::Complex32));
        assert!(!PrecisionSet::REAL.supports(Precision::Complex64));
        assert_eq!(Precision::Complex64.real(), Precision::Real64);
        assert_eq!(
            PrecisionSet::REAL | PrecisionSet::COMPLEX,
            PrecisionSet::all()
        );
    }
}
