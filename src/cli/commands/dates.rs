use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;
use crate::utils::date::{soon_dates, today};

/// Handle the `dates` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    header("Bookable dates");
    print!(
        "{}",
        render::dates(&soon_dates(today(), cfg.booking_window_days))
    );
    Ok(())
}
