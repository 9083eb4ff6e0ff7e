//! Constants for the GNSS node core
//!
//! Numeric values live here instead of inline in the algorithms, grouped by
//! domain and documented with their source.

/// Calendar and epoch constants.
pub mod time;

pub use time::{GPS_EPOCH_UNIX_SECONDS, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
