// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::{DateBounds, contains, parse_range};
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the reservation history.
pub struct ExportLogic;

impl ExportLogic {
    /// Select reservations by date range and status, keeping history order.
    pub fn select(
        reservations: &[Reservation],
        bounds: Option<&DateBounds>,
        status: Option<ReservationStatus>,
    ) -> Vec<Reservation> {
        reservations
            .iter()
            .filter(|r| bounds.is_none_or(|b| contains(b, &r.date)))
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect()
    }

    /// Export to `file`, returning how many reservations were written.
    ///
    /// - `file`: absolute path (a leading `~/` is expanded)
    /// - `range`: `None`, `"all"`, or YYYY / YYYY-MM / YYYY-MM-DD and
    ///   `start:end` ranges of the same shape
    pub fn export(
        reservations: &[Reservation],
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        status: Option<ReservationStatus>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        let selected = Self::select(reservations, bounds.as_ref(), status);

        if selected.is_empty() {
            warning("No reservations found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&selected, &path)?,
            ExportFormat::Json => export_json(&selected, &path)?,
        }

        Ok(selected.len())
    }
}
