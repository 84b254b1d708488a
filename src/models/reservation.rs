use super::cart::CartLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the order is collected in person or delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMode {
    #[default]
    Pickup,
    Delivery,
}

impl FulfillmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentMode::Pickup => "pickup",
            FulfillmentMode::Delivery => "delivery",
        }
    }

    /// Helper: convert user input (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pickup" => Some(Self::Pickup),
            "delivery" => Some(Self::Delivery),
            _ => None,
        }
    }
}

impl fmt::Display for FulfillmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Reserved,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Reserved => "reserved",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "reserved" => Some(Self::Reserved),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ReservationStatus::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cart line frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationItem {
    pub id: String,
    pub name: String,
    pub qty: u32,
    pub price: u64,
}

impl From<&CartLine> for ReservationItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            qty: line.qty,
            price: line.price,
        }
    }
}

/// A persisted reservation record.
///
/// Field names follow the stored JSON layout (`createdAt` is camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub mode: FulfillmentMode,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub items: Vec<ReservationItem>,
    pub total: u64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }

    /// "2 x Paneer Butter Masala; 1 x Street-style Dosa"
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|it| format!("{} x {}", it.qty, it.name))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Total recomputed from the item snapshot.
    pub fn items_total(&self) -> u64 {
        self.items
            .iter()
            .map(|it| u64::from(it.qty) * it.price)
            .sum()
    }
}
