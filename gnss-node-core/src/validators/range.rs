//! Inclusive Bound Checks
//!
//! ## Overview
//!
//! The smallest building block of the configuration layer: given a value and a
//! bound, either return `Ok(())` or a [`ConfigError`] that names the parameter
//! and the bound it broke. Every accessor in [`crate::params`] funnels through
//! these functions, so the wording of a range failure is the same whether the
//! bound came from the caller or from the width of the target integer type.
//!
//! ## Design Principles
//!
//! ### 1. Pure Functions
//! No store access, no logging, no side effects. Callers decide what to log.
//!
//! ### 2. Generic Over Comparable Types
//! The value and the bounds may be different types as long as the value can be
//! compared against the bound (`V: PartialOrd<T>`). Accessors widen both sides
//! to `i128` so that a `u64` bound and an `i64` raw value compare exactly.
//!
//! ### 3. First Violation Wins
//! Sequence checks stop at the first bad element and tag the name with its
//! index:
//! ```rust
//! use gnss_node_core::validators::check_range_each;
//!
//! let err = check_range_each(&[1, 2, 900, 4], 0, 255, "rates").unwrap_err();
//! assert_eq!(err.key(), "rates[2]");
//! ```
//!
//! ## Bounds
//!
//! Both bounds are inclusive. `min <= max` is assumed by the caller and not
//! verified; with inverted bounds every value fails.

use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Display;

use crate::errors::{ConfigError, ConfigResult};

/// Check that `value` is at least `min`
pub fn check_min<V, T>(value: V, min: T, name: &str) -> ConfigResult<()>
where
    V: PartialOrd<T> + Display,
    T: Display,
{
    if value < min {
        Err(ConfigError::BelowMinimum {
            name: name.to_string(),
            value: value.to_string(),
            min: min.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Check that `value` lies in `[min, max]`
pub fn check_range<V, T>(value: V, min: T, max: T, name: &str) -> ConfigResult<()>
where
    V: PartialOrd<T> + Display,
    T: Display,
{
    if value < min || value > max {
        Err(out_of_range(value, min, max, name.to_string(), None))
    } else {
        Ok(())
    }
}

/// Check every element of `values` against `[min, max]`
///
/// The error for element `i` is reported under `name[i]`, with `i` also
/// available from [`ConfigError::index`].
pub fn check_range_each<V, T>(values: &[V], min: T, max: T, name: &str) -> ConfigResult<()>
where
    V: PartialOrd<T> + Display + Copy,
    T: Display + Copy,
{
    for (i, &value) in values.iter().enumerate() {
        if value < min || value > max {
            return Err(out_of_range(value, min, max, format!("{name}[{i}]"), Some(i)));
        }
    }
    Ok(())
}

fn out_of_range<V, T>(value: V, min: T, max: T, name: String, index: Option<usize>) -> ConfigError
where
    V: Display,
    T: Display,
{
    ConfigError::OutOfRange {
        name,
        index,
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
    }
}
