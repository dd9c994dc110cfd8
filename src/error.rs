use thiserror::Error;

use crate::core::precision::Precision;

// Unified error type for blas1

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlasError {
    #[error("invalid stride for `{arg}`: increment must be nonzero")]
    InvalidStride { arg: &'static str },
    #[error("invalid offset {offset} for `{arg}`: expected 0 <= offset < {len}")]
    InvalidOffset {
        arg: &'static str,
        offset: isize,
        len: usize,
    },
    #[error("`{arg}` too short: n={n}, offset={offset}, inc={inc} reaches past {len} elements")]
    VectorTooShort {
        arg: &'static str,
        n: usize,
        offset: usize,
        inc: isize,
        len: usize,
    },
    #[error("operation `{op}` has no {precision} kernel")]
    UnsupportedPrecision {
        op: &'static str,
        precision: Precision,
    },
}
