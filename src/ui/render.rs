//! Text views shared by the one-shot commands and the interactive shell.

use crate::core::form::ReservationForm;
use crate::models::cart::Cart;
use crate::models::menu::Menu;
use crate::models::reservation::Reservation;
use crate::utils::colors::{colorize_status, dim_if};
use crate::utils::formatting::{bold, money, wrap};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

const DESC_WIDTH: usize = 44;

/// Menu cards as a table, with the quantity currently in the cart.
pub fn menu(menu: &Menu, cart: &Cart, currency: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Dish"),
        Column::right("Price"),
        Column::right("In cart"),
        Column::left("Description"),
    ]);

    for item in menu.items() {
        let desc = wrap(&item.desc, DESC_WIDTH);
        let mut lines = desc.into_iter();

        table.add_row(vec![
            item.id.clone(),
            item.name.clone(),
            money(currency, item.price),
            cart.qty(&item.id).to_string(),
            lines.next().unwrap_or_default(),
        ]);
        for more in lines {
            table.add_row(vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                more,
            ]);
        }
    }

    let mut out = table.render();
    out.push_str(&format!(
        "\nCart: {} items | {}  (ready in 20-45 mins)\n",
        cart.item_count(),
        money(currency, cart.total())
    ));
    out
}

pub fn cart(cart: &Cart, currency: &str) -> String {
    if cart.is_empty() {
        return "Your cart is empty. Add items from the menu.\n".to_string();
    }

    let mut out = String::new();
    for line in cart.lines() {
        out.push_str(&format!(
            "{} [{}]  {} x {} = {}\n",
            line.name,
            line.id,
            money(currency, line.price),
            line.qty,
            money(currency, line.subtotal())
        ));
    }
    out.push_str(&format!("Total: {}\n", money(currency, cart.total())));
    out
}

pub fn form(form: &ReservationForm) -> String {
    format!(
        "Name:  {}\nPhone: {}\nMode:  {}\nWhen:  {} @ {}\nNotes: {}\n",
        form.name, form.phone, form.mode, form.date, form.time, form.notes
    )
}

/// The confirmation modal: form summary, items and total.
pub fn confirmation(form: &ReservationForm, cart: &Cart, currency: &str) -> String {
    let mut out = format!("{}\n", bold("Confirm Reservation"));
    out.push_str(&self::form(form));
    out.push_str("Items:\n");
    for line in cart.lines() {
        out.push_str(&format!(
            "  {} x {} - {}\n",
            line.qty,
            line.name,
            money(currency, line.subtotal())
        ));
    }
    out.push_str(&format!("Total: {}\n", money(currency, cart.total())));
    out
}

pub fn dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| format!("{}\n", d.format("%Y-%m-%d (%a)")))
        .collect()
}

/// "My Reservations": one table row per reservation, cancelled ones dimmed.
pub fn reservations(list: &[Reservation], currency: &str) -> String {
    if list.is_empty() {
        return "No reservations yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Name"),
        Column::left("Mode"),
        Column::left("When"),
        Column::right("Total"),
        Column::left("Status"),
        Column::left("Items"),
    ]);

    for r in list {
        table.add_row(vec![
            r.id.clone(),
            r.name.clone(),
            r.mode.to_string(),
            format!("{} @ {}", r.date, r.time),
            money(currency, r.total),
            r.status.to_string(),
            r.items_summary(),
        ]);
    }

    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        // first two lines are header and rule
        let cancelled = i >= 2 && list.get(i - 2).is_some_and(Reservation::is_cancelled);
        out.push_str(&dim_if(line, cancelled));
        out.push('\n');
    }
    out
}

pub fn reservation(r: &Reservation, currency: &str) -> String {
    let mut out = format!(
        "{} • {}  [{}]\n",
        bold(&r.name),
        r.mode,
        colorize_status(r.status)
    );
    out.push_str(&format!("Id:      {}\n", r.id));
    out.push_str(&format!("Phone:   {}\n", r.phone));
    out.push_str(&format!("When:    {} @ {}\n", r.date, r.time));
    out.push_str(&format!("Created: {}\n", r.created_at));
    if !r.notes.is_empty() {
        out.push_str(&format!("Notes:   {}\n", r.notes));
    }
    out.push_str("Items:\n");
    for it in &r.items {
        out.push_str(&format!(
            "  {} x {} - {}\n",
            it.qty,
            it.name,
            money(currency, u64::from(it.qty) * it.price)
        ));
    }
    out.push_str(&format!("Total:   {}\n", money(currency, r.total)));
    out
}
