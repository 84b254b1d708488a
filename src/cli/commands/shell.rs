use crate::cli::commands::open_session;
use crate::cli::commands::reserve::{add_units, parse_item_spec};
use crate::config::Config;
use crate::core::session::Session;
use crate::db::store::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, inline_error, success};
use crate::ui::prompt::ask_confirmation_from;
use crate::ui::render;
use chrono::Local;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  menu                 show the menu
  add <id>             add one unit to the cart
  dec <id>             remove one unit from the cart
  qty <id> <n>         set the quantity (0 or less removes the line)
  cart                 show the cart
  clear                empty the cart
  name <text>          set your name
  phone <digits>       set your phone number
  mode <pickup|delivery>
  dates                show bookable dates
  date <YYYY-MM-DD>    pick a date
  time <HH:MM>         pick a time
  notes <text>         set notes
  form                 show the form
  reserve              validate and open the confirmation step
  confirm              save the reservation
  back                 leave the confirmation step
  list                 show my reservations
  cancel <id>          cancel a reservation
  help                 show this help
  quit                 leave the shell
";

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle the `shell` command: one session kept alive until `quit` or EOF.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;

    header("HomeFood Reserve");
    info("Type `help` for the list of commands.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(&mut session, &mut input, &cfg.currency)
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<S: BlobStore, R: BufRead>(
    session: &mut Session<S>,
    input: &mut R,
    currency: &str,
) -> AppResult<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match execute(session, line.trim(), input, currency) {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(AppError::Validation(e)) => inline_error(e),
            Err(e) => error(e),
        }
    }
}

/// Run one shell command line against the session.
pub fn execute<S: BlobStore, R: BufRead>(
    session: &mut Session<S>,
    line: &str,
    input: &mut R,
    currency: &str,
) -> AppResult<Flow> {
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "help" | "?" => print!("{HELP}"),
        "quit" | "exit" => return Ok(Flow::Quit),

        "menu" => print!("{}", render::menu(session.menu(), &session.cart, currency)),
        "add" => {
            let (id, qty) = parse_item_spec(arg)?;
            add_units(session, &id, qty)?;
            print!("{}", render::cart(&session.cart, currency));
        }
        "dec" => {
            session.decrement(arg)?;
            print!("{}", render::cart(&session.cart, currency));
        }
        "qty" => {
            let (id, n) = arg
                .split_once(char::is_whitespace)
                .ok_or_else(|| AppError::InvalidItem(arg.into()))?;
            let n: i64 = n
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidItem(arg.into()))?;
            session.update_qty(id, n)?;
            print!("{}", render::cart(&session.cart, currency));
        }
        "cart" => print!("{}", render::cart(&session.cart, currency)),
        "clear" => {
            session.clear_cart();
            info("Cart cleared.");
        }

        "name" => session.set_name(arg),
        "phone" => session.set_phone(arg),
        "notes" => session.set_notes(arg),
        "mode" => session.set_mode(arg)?,
        "dates" => print!("{}", render::dates(&session.soon_dates())),
        "date" => session.set_date(arg)?,
        "time" => session.set_time(arg)?,
        "form" => print!("{}", render::form(&session.form)),

        "reserve" => {
            session.request_reservation(Local::now())?;
            print!(
                "{}",
                render::confirmation(&session.form, &session.cart, currency)
            );
            info("Type `confirm` to save or `back` to edit.");
        }
        "confirm" => {
            let r = session.confirm_reservation(Local::now())?;
            success(format!(
                "Reservation saved! Id: {}  (type `list` to see it)",
                r.id
            ));
        }
        "back" => session.back(),

        "list" => print!("{}", render::reservations(session.reservations(), currency)),
        "cancel" => {
            session.check_cancellable(arg)?;
            if ask_confirmation_from(input, "Cancel this reservation?") {
                session.cancel_reservation(arg)?;
                success(format!("Reservation {} cancelled.", arg));
            } else {
                info("Operation cancelled.");
            }
        }

        other => error(format!("Unknown command '{}'. Type `help`.", other)),
    }

    Ok(Flow::Continue)
}
