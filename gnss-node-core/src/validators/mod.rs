//! Configuration Validators
//!
//! Range checks shared by every parameter accessor. See [`range`] for the
//! bound semantics.

pub mod range;

pub use range::{check_min, check_range, check_range_each};
