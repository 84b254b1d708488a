pub mod cancel;
pub mod config;
pub mod dates;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod menu;
pub mod reserve;
pub mod shell;
pub mod show;

use crate::config::Config;
use crate::core::form::FormDefaults;
use crate::core::session::Session;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::menu::Menu;
use crate::models::reservation::ReservationStatus;
use crate::utils::date;

/// Open the configured database and load the reservation history.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    let defaults = FormDefaults::from_config(cfg, date::today());
    Session::open(store, &cfg.storage_key, Menu::sample(), defaults)
}

pub(crate) fn parse_status(input: Option<&str>) -> AppResult<Option<ReservationStatus>> {
    input
        .map(|s| ReservationStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.into())))
        .transpose()
}
