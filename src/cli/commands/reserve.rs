use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::db::store::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::ui::render;
use chrono::Local;

/// Parse `ID` or `ID:QTY` (QTY ≥ 1).
pub fn parse_item_spec(spec: &str) -> AppResult<(String, u32)> {
    let (id, qty) = match spec.split_once(':') {
        Some((id, q)) => {
            let qty: u32 = q
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidItem(spec.into()))?;
            (id.trim(), qty)
        }
        None => (spec.trim(), 1),
    };

    if id.is_empty() || qty == 0 {
        return Err(AppError::InvalidItem(spec.into()));
    }
    Ok((id.to_string(), qty))
}

/// Put `qty` units of `id` into the cart, on top of what is already there.
pub fn add_units<S: BlobStore>(session: &mut Session<S>, id: &str, qty: u32) -> AppResult<()> {
    session.add_to_cart(id)?;
    if qty > 1 {
        let current = i64::from(session.cart.qty(id));
        session.update_qty(id, current + i64::from(qty) - 1)?;
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reserve {
        name,
        phone,
        mode,
        date,
        time,
        notes,
        items,
        yes,
    } = cmd
    {
        let mut session = open_session(cfg)?;

        for spec in items {
            let (id, qty) = parse_item_spec(spec)?;
            add_units(&mut session, &id, qty)?;
        }

        session.set_name(name);
        session.set_phone(phone);
        session.set_notes(notes);
        if let Some(m) = mode {
            session.set_mode(m)?;
        }
        if let Some(d) = date {
            session.set_date(d)?;
        }
        if let Some(t) = time {
            session.set_time(t)?;
        }

        session.request_reservation(Local::now())?;

        print!(
            "{}",
            render::confirmation(&session.form, &session.cart, &cfg.currency)
        );

        if !*yes && !ask_confirmation("Save this reservation?") {
            session.back();
            info("Reservation not saved.");
            return Ok(());
        }

        let r = session.confirm_reservation(Local::now())?;

        success(format!(
            "Reservation saved! Id: {}  (see `foodreserve list`)",
            r.id
        ));
    }
    Ok(())
}
