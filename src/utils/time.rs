//! Time utilities: parsing HH:MM and combining date + time into a local instant.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Parse `HH:MM` (as produced by a time picker) or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Combine a `YYYY-MM-DD` date and a time into a local instant.
///
/// `None` when either part does not parse or the wall-clock time does not
/// exist in the local timezone (DST gap).
pub fn local_instant(date: &str, time: &str) -> Option<DateTime<Local>> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let t = parse_time(time)?;
    Local.from_local_datetime(&d.and_time(t)).earliest()
}
