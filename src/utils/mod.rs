//! Utility helpers.

pub mod checks;
pub use checks::{check_extent, check_increment, check_offset};
