//! Known UTC instants
//!
//! Reference values computed independently (`date -u -d ... +%s`).

use gnss_node_core::time::CalendarTimestamp;

/// A calendar instant and its Unix seconds
pub struct KnownInstant {
    pub name: &'static str,
    pub timestamp: CalendarTimestamp,
    pub unix_seconds: i64,
}

const fn instant(
    name: &'static str,
    (year, month, day): (i32, i32, i32),
    (hour, minute, second): (i32, i32, i32),
    unix_seconds: i64,
) -> KnownInstant {
    KnownInstant {
        name,
        timestamp: CalendarTimestamp::new(year, month, day, hour, minute, second),
        unix_seconds,
    }
}

pub const KNOWN_INSTANTS: &[KnownInstant] = &[
    instant("unix_epoch", (1970, 1, 1), (0, 0, 0), 0),
    instant("gps_epoch", (1980, 1, 6), (0, 0, 0), 315_964_800),
    instant("y2k", (2000, 1, 1), (0, 0, 0), 946_684_800),
    instant("gps_week_rollover_2019", (2019, 4, 7), (0, 0, 0), 1_554_595_200),
    instant("new_year_2024", (2024, 1, 1), (0, 0, 0), 1_704_067_200),
    instant("leap_day_2024_noon", (2024, 2, 29), (12, 0, 0), 1_709_208_000),
    instant("last_second_2016", (2016, 12, 31), (23, 59, 59), 1_483_228_799),
    instant("non_leap_century", (1900, 3, 1), (0, 0, 0), -2_203_891_200),
    instant("year_2100", (2100, 1, 1), (0, 0, 0), 4_102_444_800),
];
