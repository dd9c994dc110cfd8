//! Public Level-1 operations.
//!
//! Each operation selects its kernel from the dispatch table, resolves and
//! validates its vector arguments, and then calls the backend. Validation
//! always finishes before any buffer is written.

pub mod reduce;
pub mod rotation;
pub mod vector;

pub use reduce::{asum, dot, dotc, dotu, iamax, nrm2};
pub use rotation::{rot, rot_in_place, rotg, rotm, rotm_in_place, rotmg};
pub use vector::{axpy, copy, scal, scal_real, swap};
