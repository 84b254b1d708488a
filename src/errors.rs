//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validate::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Form / input errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid fulfillment mode: {0} (use pickup or delivery)")]
    InvalidMode(String),

    #[error("Invalid reservation status: {0} (use reserved or cancelled)")]
    InvalidStatus(String),

    #[error("Invalid item spec '{0}' (expected ID or ID:QTY)")]
    InvalidItem(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No menu item with id '{0}'")]
    UnknownItem(String),

    #[error("No reservation with id '{0}'")]
    ReservationNotFound(String),

    #[error("Reservation '{0}' is already cancelled")]
    AlreadyCancelled(String),

    #[error("Nothing to confirm: run 'reserve' first")]
    NothingToConfirm,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
