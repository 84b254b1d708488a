use crate::errors::{AppError, AppResult};
use crate::models::reservation::FulfillmentMode;
use crate::utils::date::{format_date, parse_date, soon_dates};
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// Values the user has typed into the reservation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub mode: FulfillmentMode,
    pub date: String,
    pub time: String,
    pub notes: String,
}

/// Initial form values.
#[derive(Debug, Clone)]
pub struct FormDefaults {
    pub mode: FulfillmentMode,
    pub today: NaiveDate,
    pub time: String,
    pub booking_window_days: u32,
}

impl ReservationForm {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            mode: defaults.mode,
            date: format_date(defaults.today),
            time: defaults.time.clone(),
            notes: String::new(),
        }
    }

    pub fn set_mode(&mut self, code: &str) -> AppResult<()> {
        self.mode =
            FulfillmentMode::from_code(code).ok_or_else(|| AppError::InvalidMode(code.into()))?;
        Ok(())
    }

    /// Pick one of the selectable dates (the picker only offers those).
    pub fn set_date(&mut self, input: &str, defaults: &FormDefaults) -> AppResult<()> {
        let d = parse_date(input).ok_or_else(|| AppError::InvalidDate(input.into()))?;
        let allowed = soon_dates(defaults.today, defaults.booking_window_days);

        if !allowed.contains(&d) {
            return Err(AppError::InvalidDate(format!(
                "{} is outside the booking window ({} to {})",
                input,
                allowed.first().map(|d| format_date(*d)).unwrap_or_default(),
                allowed.last().map(|d| format_date(*d)).unwrap_or_default(),
            )));
        }

        self.date = format_date(d);
        Ok(())
    }

    /// Accept any `HH:MM` the time picker could produce.
    pub fn set_time(&mut self, input: &str) -> AppResult<()> {
        let t = parse_time(input.trim()).ok_or_else(|| AppError::InvalidTime(input.into()))?;
        self.time = t.format("%H:%M").to_string();
        Ok(())
    }

    /// Clear the per-customer fields after a successful reservation.
    pub fn reset_contact(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.notes.clear();
    }
}

impl FormDefaults {
    pub fn from_config(cfg: &crate::config::Config, today: NaiveDate) -> Self {
        Self {
            mode: cfg.default_mode,
            today,
            time: cfg.default_time.clone(),
            booking_window_days: cfg.booking_window_days,
        }
    }
}
