// src/export/model.rs

use crate::models::reservation::Reservation;
use serde::Serialize;

/// Flat reservation row for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReservationExport {
    pub id: String,
    pub created_at: String,
    pub name: String,
    pub phone: String,
    pub mode: String,
    pub date: String,
    pub time: String,
    pub items: String,
    pub total: u64,
    pub status: String,
    pub notes: String,
}

impl From<&Reservation> for ReservationExport {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id.clone(),
            created_at: r.created_at.clone(),
            name: r.name.clone(),
            phone: r.phone.clone(),
            mode: r.mode.as_str().to_string(),
            date: r.date.clone(),
            time: r.time.clone(),
            items: r.items_summary(),
            total: r.total,
            status: r.status.as_str().to_string(),
            notes: r.notes.clone(),
        }
    }
}
