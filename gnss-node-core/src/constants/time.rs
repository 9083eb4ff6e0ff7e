//! Time-Related Constants
//!
//! Calendar and epoch constants used by the UTC converter in
//! [`crate::time`]. All values are exact; none are tunable.

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute (leap seconds are not modelled).
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: i64 = 24;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Seconds per civil day.
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

// ===== GREGORIAN CALENDAR =====

/// Months per year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Years in one Gregorian cycle.
///
/// The leap-year rule (every 4th year, except centuries, except every 4th
/// century) repeats exactly every 400 years.
pub const YEARS_PER_ERA: i64 = 400;

/// Days in one 400-year Gregorian cycle.
///
/// 400 * 365 + 100 leap days - 4 skipped centuries + 1 restored century.
pub const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
///
/// Day counting starts on March 1st so the leap day falls at the end of the
/// counted year.
pub const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;

// ===== EPOCHS =====

/// GPS epoch (1980-01-06T00:00:00Z) as Unix seconds.
///
/// Source: IS-GPS-200, section 20.3.3.5.2.4
pub const GPS_EPOCH_UNIX_SECONDS: i64 = 315_964_800;
