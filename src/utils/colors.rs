/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

use crate::models::reservation::ReservationStatus;

/// reserved → green, cancelled → red
pub fn color_for_status(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Reserved => GREEN,
        ReservationStatus::Cancelled => RED,
    }
}

pub fn colorize_status(status: ReservationStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

/// Cancelled reservations are dimmed in listings.
pub fn dim_if(value: &str, dim: bool) -> String {
    if dim {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
