use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { id, yes } = cmd {
        let mut session = open_session(cfg)?;

        session.check_cancellable(id)?;

        if !*yes && !ask_confirmation("Cancel this reservation?") {
            info("Operation cancelled.");
            return Ok(());
        }

        let r = session.cancel_reservation(id)?;
        success(format!("Reservation {} for {} cancelled.", r.id, r.name));
    }
    Ok(())
}
