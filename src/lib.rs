//! blas1: validated Level-1 BLAS over strided buffers
//!
//! This crate exposes the vector-vector BLAS primitives (rotations, swap, scale,
//! copy, axpy, dot products, norms, sums and argmax) for `f32`, `f64`,
//! `Complex<f32>` and `Complex<f64>`. Each call resolves default
//! stride/offset/length parameters, checks that every access stays inside the
//! caller's buffers, and dispatches to a precision-specific kernel.

pub mod backend;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod resolve;
pub mod utils;

// Re-exports for convenience
pub use backend::{ComplexLevel1, Level1, RealLevel1};
pub use config::*;
pub use crate::core::*;
pub use dispatch::{Operation, OpDescriptor};
pub use error::*;
pub use ops::*;
pub use resolve::LengthRule;
