//! Date utilities: today, selectable booking dates, parsing.

use chrono::{Days, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `today` and the following `window - 1` days.
pub fn soon_dates(today: NaiveDate, window: u32) -> Vec<NaiveDate> {
    (0..u64::from(window))
        .filter_map(|n| today.checked_add_days(Days::new(n)))
        .collect()
}
