//! Load / save of the reservation history blob.
//!
//! The history is a single JSON array, newest first, overwritten as a whole
//! on every change.

use crate::db::store::BlobStore;
use crate::errors::AppResult;
use crate::models::reservation::Reservation;
use chrono::{DateTime, Local};
use serde_json::Value;

pub fn load<S: BlobStore + ?Sized>(store: &S, key: &str) -> AppResult<Vec<Reservation>> {
    match store.get(key)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => Ok(serde_json::from_value(v)?),
    }
}

pub fn save<S: BlobStore + ?Sized>(
    store: &mut S,
    key: &str,
    history: &[Reservation],
) -> AppResult<()> {
    let value = serde_json::to_value(history)?;
    store.set(key, &value)
}

/// `res_<epoch millis>`, bumped until it does not clash with `history`.
pub fn next_id(now: DateTime<Local>, history: &[Reservation]) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("res_{}", millis);
        if !history.iter().any(|r| r.id == id) {
            return id;
        }
        millis += 1;
    }
}

pub fn find<'a>(history: &'a [Reservation], id: &str) -> Option<&'a Reservation> {
    history.iter().find(|r| r.id == id)
}
