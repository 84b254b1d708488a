// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Inclusive date bounds applied to the reservation date.
pub type DateBounds = (NaiveDate, NaiveDate);

/// Parse --range.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end, both sides in the same format
/// - all (no filter)
pub fn parse_range(r: &str) -> AppResult<Option<DateBounds>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r, r),
    };

    if start_raw.len() != end_raw.len() {
        return Err(invalid(r, "start and end must have the same format"));
    }

    let start = first_day(start_raw).ok_or_else(|| invalid(r, "invalid start"))?;
    let end = last_day(end_raw).ok_or_else(|| invalid(r, "invalid end"))?;

    if end < start {
        return Err(invalid(r, "end is before start"));
    }

    Ok(Some((start, end)))
}

pub fn contains(bounds: &DateBounds, date: &str) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => bounds.0 <= d && d <= bounds.1,
        Err(_) => false,
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("{r}: {why}"))
}

fn year_month(s: &str) -> Option<(i32, u32)> {
    let (y, m) = s.split_once('-')?;
    Some((y.parse().ok()?, m.parse().ok()?))
}

fn first_day(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        7 => {
            let (y, m) = year_month(s)?;
            NaiveDate::from_ymd_opt(y, m, 1)
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}

fn last_day(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 12, 31),
        7 => {
            let (y, m) = year_month(s)?;
            if !(1..=12).contains(&m) {
                return None;
            }
            let next = if m == 12 {
                NaiveDate::from_ymd_opt(y + 1, 1, 1)?
            } else {
                NaiveDate::from_ymd_opt(y, m + 1, 1)?
            };
            next.pred_opt()
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}
