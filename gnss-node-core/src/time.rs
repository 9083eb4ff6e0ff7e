//! UTC timestamps for navigation fixes
//!
//! A receiver reports the time of a fix as calendar fields (year, month, day,
//! hour, minute, second) already in UTC. The node needs that instant as Unix
//! seconds to stamp outgoing fix messages.
//!
//! The usual libc routines are the wrong tool: `mktime` interprets its input as
//! *local* time and consults the process timezone, and `timegm` is not
//! portable. The conversion here is plain integer arithmetic over the
//! proleptic Gregorian calendar:
//!
//! ```text
//! seconds = days_from_civil(year, month, day) * 86400
//!         + hour * 3600 + minute * 60 + second
//! ```
//!
//! ## Field Ranges
//!
//! Fields are not validated; the protocol layer hands over well-formed fixes.
//! Out-of-range input still produces a deterministic result:
//! - a month outside `1..=12` carries into the year (month 13 of 2023 is
//!   January 2024, month 0 is December of the previous year)
//! - day, hour, minute and second contribute linearly (day 32 of January is
//!   February 1st, second 60 is the first second of the next minute)
//!
//! Leap seconds are not modelled, matching Unix time.
//!
//! ## Example
//!
//! ```rust
//! use gnss_node_core::time::{to_utc_seconds, CalendarTimestamp};
//!
//! let fix = CalendarTimestamp::new(2024, 1, 1, 0, 0, 0);
//! assert_eq!(to_utc_seconds(&fix), 1_704_067_200);
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::time::{
    DAYS_PER_ERA, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    UNIX_EPOCH_DAY_OFFSET, YEARS_PER_ERA,
};

/// Unix time in whole seconds (negative before 1970)
pub type UtcSeconds = i64;

/// Anything carrying the six calendar fields of a UTC instant
///
/// Implement this for the driver's navigation-solution message so it can be
/// passed to [`to_utc_seconds`] directly:
///
/// ```rust
/// use gnss_node_core::time::{to_utc_seconds, CalendarFields};
///
/// struct NavPvt { year: u16, month: u8, day: u8, hour: u8, min: u8, sec: u8 }
///
/// impl CalendarFields for NavPvt {
///     fn year(&self) -> i32 { self.year.into() }
///     fn month(&self) -> i32 { self.month.into() }
///     fn day(&self) -> i32 { self.day.into() }
///     fn hour(&self) -> i32 { self.hour.into() }
///     fn minute(&self) -> i32 { self.min.into() }
///     fn second(&self) -> i32 { self.sec.into() }
/// }
///
/// let pvt = NavPvt { year: 1980, month: 1, day: 6, hour: 0, min: 0, sec: 0 };
/// assert_eq!(to_utc_seconds(&pvt), 315_964_800);
/// ```
pub trait CalendarFields {
    /// Full year, e.g. 2024
    fn year(&self) -> i32;
    /// Month, 1-12
    fn month(&self) -> i32;
    /// Day of month, 1-31
    fn day(&self) -> i32;
    /// Hour, 0-23
    fn hour(&self) -> i32;
    /// Minute, 0-59
    fn minute(&self) -> i32;
    /// Second, 0-60
    fn second(&self) -> i32;
}

/// Calendar timestamp in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarTimestamp {
    /// Full year
    pub year: i32,
    /// Month, 1-12
    pub month: i32,
    /// Day of month, 1-31
    pub day: i32,
    /// Hour, 0-23
    pub hour: i32,
    /// Minute, 0-59
    pub minute: i32,
    /// Second, 0-60
    pub second: i32,
}

impl CalendarTimestamp {
    /// Build a timestamp from its six fields
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Calendar fields of a Unix timestamp
    ///
    /// Always yields normalized fields. `None` if the year does not fit `i32`.
    pub fn from_utc_seconds(seconds: UtcSeconds) -> Option<Self> {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let secs_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days)?;

        Some(Self {
            year,
            month,
            day,
            hour: (secs_of_day / SECONDS_PER_HOUR) as i32,
            minute: (secs_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as i32,
            second: (secs_of_day % SECONDS_PER_MINUTE) as i32,
        })
    }

    /// Seconds since the Unix epoch
    pub fn to_utc_seconds(&self) -> UtcSeconds {
        to_utc_seconds(self)
    }
}

impl CalendarFields for CalendarTimestamp {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> i32 {
        self.month
    }

    fn day(&self) -> i32 {
        self.day
    }

    fn hour(&self) -> i32 {
        self.hour
    }

    fn minute(&self) -> i32 {
        self.minute
    }

    fn second(&self) -> i32 {
        self.second
    }
}

impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Seconds from 1970-01-01T00:00:00Z to the given UTC calendar instant
///
/// Never consults timezone state and never fails.
pub fn to_utc_seconds<C>(timestamp: &C) -> UtcSeconds
where
    C: CalendarFields + ?Sized,
{
    let days = days_from_civil(timestamp.year(), timestamp.month(), timestamp.day());

    days * SECONDS_PER_DAY
        + i64::from(timestamp.hour()) * SECONDS_PER_HOUR
        + i64::from(timestamp.minute()) * SECONDS_PER_MINUTE
        + i64::from(timestamp.second())
}

/// Days from 1970-01-01 to the given proleptic Gregorian date
///
/// Months outside `1..=12` carry into the year; days are added linearly.
/// Defined for every `i32` input: the arithmetic is done in `i64`, which
/// holds the day count of any `i32` year with room to spare.
pub fn days_from_civil(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let year = year + (month - 1).div_euclid(MONTHS_PER_YEAR);
    let month = (month - 1).rem_euclid(MONTHS_PER_YEAR) + 1;

    // Count years from March so February's leap day ends the year
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(YEARS_PER_ERA);
    let year_of_era = year - era * YEARS_PER_ERA;
    let march_month = (month + 9) % MONTHS_PER_YEAR;
    let day_of_year = (153 * march_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY_OFFSET
}

/// Proleptic Gregorian `(year, month, day)` of a day count since 1970-01-01
///
/// `None` if the year does not fit `i32`.
pub fn civil_from_days(days: i64) -> Option<(i32, i32, i32)> {
    let days = days.checked_add(UNIX_EPOCH_DAY_OFFSET)?;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    };
    let year = year_of_era + era * YEARS_PER_ERA;
    let year = if month <= 2 { year + 1 } else { year };

    // month and day are bounded by the era arithmetic
    Some((i32::try_from(year).ok()?, month as i32, day as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::GPS_EPOCH_UNIX_SECONDS;

    fn utc(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> i64 {
        to_utc_seconds(&CalendarTimestamp::new(year, month, day, hour, minute, second))
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(utc(1970, 1, 1, 0, 0, 0), 0);
        assert_eq!(days_from_civil(1970, 1, 1), 0);
    }

    #[test]
    fn known_instants() {
        assert_eq!(utc(2024, 1, 1, 0, 0, 0), 1_704_067_200);
        assert_eq!(utc(1980, 1, 6, 0, 0, 0), GPS_EPOCH_UNIX_SECONDS);
        assert_eq!(utc(2000, 1, 1, 0, 0, 0), 946_684_800);
        assert_eq!(utc(2038, 1, 19, 3, 14, 8), 1i64 << 31);
        assert_eq!(utc(1969, 12, 31, 23, 59, 59), -1);
    }

    #[test]
    fn leap_day_2024() {
        let feb_28 = utc(2024, 2, 28, 12, 0, 0);
        let feb_29 = utc(2024, 2, 29, 12, 0, 0);
        assert_eq!(feb_29 - feb_28, SECONDS_PER_DAY);
        assert_eq!(utc(2024, 3, 1, 12, 0, 0) - feb_29, SECONDS_PER_DAY);
    }

    #[test]
    fn century_rule() {
        // 1900 is not a leap year: Feb 28 is followed directly by Mar 1
        assert_eq!(days_from_civil(1900, 3, 1) - days_from_civil(1900, 2, 28), 1);
        assert_eq!(utc(1900, 3, 1, 0, 0, 0), -2_203_891_200);

        // 2000 is
        assert_eq!(days_from_civil(2000, 3, 1) - days_from_civil(2000, 2, 28), 2);
    }

    #[test]
    fn year_2100_fits() {
        assert_eq!(utc(2100, 1, 1, 0, 0, 0), 4_102_444_800);
        assert_eq!(days_from_civil(2100, 3, 1) - days_from_civil(2100, 2, 28), 1);
    }

    #[test]
    fn month_overflow_carries_into_year() {
        assert_eq!(utc(2023, 13, 1, 0, 0, 0), utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(utc(2024, 0, 1, 0, 0, 0), utc(2023, 12, 1, 0, 0, 0));
        assert_eq!(utc(2024, -11, 1, 0, 0, 0), utc(2023, 1, 1, 0, 0, 0));
    }

    #[test]
    fn linear_field_overflow() {
        assert_eq!(utc(2024, 1, 32, 0, 0, 0), utc(2024, 2, 1, 0, 0, 0));
        assert_eq!(utc(2024, 6, 30, 23, 59, 60), utc(2024, 7, 1, 0, 0, 0));
        assert_eq!(utc(2024, 6, 30, 24, 0, 0), utc(2024, 7, 1, 0, 0, 0));
    }

    #[test]
    fn civil_round_trip_across_eras() {
        for days in [-800_000i64, -1, 0, 1, 11_016, 19_723, 47_482, 800_000] {
            let (y, m, d) = civil_from_days(days).unwrap();
            assert_eq!(days_from_civil(y, m, d), days, "day {days}");
        }
    }

    #[test]
    fn extreme_fields_do_not_overflow() {
        let latest = days_from_civil(i32::MAX, i32::MAX, i32::MAX);
        let earliest = days_from_civil(i32::MIN, i32::MIN, i32::MIN);
        assert!(latest > 0);
        assert!(earliest < 0);

        let far = CalendarTimestamp::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        assert!(to_utc_seconds(&far) > 0);
        let far = CalendarTimestamp::new(i32::MIN, i32::MIN, i32::MIN, i32::MIN, i32::MIN, i32::MIN);
        assert!(to_utc_seconds(&far) < 0);
    }

    #[test]
    fn day_counts_beyond_i32_years_are_rejected() {
        assert_eq!(civil_from_days(i64::MAX), None);
        assert_eq!(civil_from_days(i64::MIN), None);
        assert_eq!(civil_from_days(i64::MAX - UNIX_EPOCH_DAY_OFFSET), None);

        let (y, m, d) = civil_from_days(days_from_civil(i32::MAX, 12, 31)).unwrap();
        assert_eq!((y, m, d), (i32::MAX, 12, 31));
        assert_eq!(civil_from_days(days_from_civil(i32::MAX, 12, 31) + 1), None);
    }

    #[test]
    fn from_utc_seconds_normalizes() {
        let ts = CalendarTimestamp::from_utc_seconds(1_709_208_000).unwrap();
        assert_eq!(ts, CalendarTimestamp::new(2024, 2, 29, 12, 0, 0));

        let ts = CalendarTimestamp::from_utc_seconds(-1).unwrap();
        assert_eq!(ts, CalendarTimestamp::new(1969, 12, 31, 23, 59, 59));
        assert_eq!(ts.to_utc_seconds(), -1);

        assert!(CalendarTimestamp::from_utc_seconds(i64::MAX).is_none());
        assert!(CalendarTimestamp::from_utc_seconds(i64::MIN).is_none());
    }

    #[test]
    fn display_is_iso8601() {
        let ts = CalendarTimestamp::new(2024, 2, 29, 7, 5, 9);
        assert_eq!(ts.to_string(), "2024-02-29T07:05:09Z");
    }
}
