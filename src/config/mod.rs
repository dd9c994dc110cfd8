//! Call configuration.

pub mod options;
pub use options::{BinaryOpts, UnaryOpts, VecOpts};
