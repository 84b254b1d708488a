//! Reservation form validation.
//!
//! Checks run in a fixed order and the first failure wins; its message is
//! what the user sees under the form.

use crate::core::form::ReservationForm;
use crate::models::cart::Cart;
use crate::utils::time::local_instant;
use chrono::{DateTime, Duration, Local};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only: `\d` would also accept other Unicode numerals.
    Regex::new(r"^[0-9]{10}$").expect("static phone regex")
});

/// How far in the past a requested time may be and still count as "now".
pub const PAST_TOLERANCE_SECS: i64 = 60;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    #[error("Cart is empty. Add items to reserve.")]
    EmptyCart,

    #[error("Please pick a valid date and time.")]
    InvalidDateTime,

    #[error("Please pick a future time.")]
    PastTime,
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate(
    form: &ReservationForm,
    cart: &Cart,
    now: DateTime<Local>,
) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    let selected =
        local_instant(&form.date, &form.time).ok_or(ValidationError::InvalidDateTime)?;

    if selected < now - Duration::seconds(PAST_TOLERANCE_SECS) {
        return Err(ValidationError::PastTime);
    }

    Ok(())
}
