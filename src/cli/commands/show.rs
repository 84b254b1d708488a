use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let session = open_session(cfg)?;
        let r = session
            .reservation(id)
            .ok_or_else(|| AppError::ReservationNotFound(id.clone()))?;

        print!("{}", render::reservation(r, &cfg.currency));
    }
    Ok(())
}
