//! Core types: element traits, precision tags and strided views.

pub mod precision;
pub mod traits;
pub mod view;

pub use precision::{Precision, PrecisionSet};
pub use traits::{ComplexScalar, RealScalar, Scalar};
pub use view::{StridedView, StridedViewMut};
