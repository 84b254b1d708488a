use crate::cli::commands::{open_session, parse_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::reservation::Reservation;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { status } = cmd {
        let status = parse_status(status.as_deref())?;
        let session = open_session(cfg)?;

        let shown: Vec<Reservation> = session
            .reservations()
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();

        header("My Reservations");
        print!("{}", render::reservations(&shown, &cfg.currency));
    }
    Ok(())
}
