use crate::cli::commands::{open_session, parse_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        status,
        force,
    } = cmd
    {
        let status = parse_status(status.as_deref())?;
        let session = open_session(cfg)?;

        let written = ExportLogic::export(
            session.reservations(),
            *format,
            file,
            range.as_deref(),
            status,
            *force,
        )?;

        if written > 0 {
            ttlog_soft(
                session.store().conn(),
                "export",
                format.as_str(),
                &format!("Exported {} reservations to {}", written, file),
            );
        }
    }
    Ok(())
}
