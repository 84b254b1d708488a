//! The reservation session: menu, cart, form and history behind one value.
//!
//! Every handler runs to completion and leaves the session consistent;
//! history changes are written to the store before the handler returns.

use crate::core::form::{FormDefaults, ReservationForm};
use crate::core::history;
use crate::core::validate::{ValidationError, validate};
use crate::db::store::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::models::cart::Cart;
use crate::models::menu::Menu;
use crate::models::reservation::{Reservation, ReservationItem, ReservationStatus};
use crate::utils::date::soon_dates;
use chrono::{DateTime, Local, NaiveDate};

pub struct Session<S: BlobStore> {
    store: S,
    key: String,
    menu: Menu,
    defaults: FormDefaults,
    pub cart: Cart,
    pub form: ReservationForm,
    reservations: Vec<Reservation>,
    confirm_pending: bool,
    error: Option<ValidationError>,
}

impl<S: BlobStore> Session<S> {
    /// Load the history once and start with an empty cart.
    pub fn open(store: S, key: &str, menu: Menu, defaults: FormDefaults) -> AppResult<Self> {
        let reservations = history::load(&store, key)?;
        let form = ReservationForm::new(&defaults);

        Ok(Self {
            store,
            key: key.to_string(),
            menu,
            defaults,
            cart: Cart::new(),
            form,
            reservations,
            confirm_pending: false,
            error: None,
        })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        history::find(&self.reservations, id)
    }

    /// The inline validation message, if the last attempt failed.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn is_confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    pub fn soon_dates(&self) -> Vec<NaiveDate> {
        soon_dates(self.defaults.today, self.defaults.booking_window_days)
    }

    // ---------------------------
    // Cart
    // ---------------------------

    pub fn add_to_cart(&mut self, id: &str) -> AppResult<()> {
        let item = self
            .menu
            .get(id)
            .ok_or_else(|| AppError::UnknownItem(id.into()))?;
        self.cart.add(item);
        self.confirm_pending = false;
        Ok(())
    }

    pub fn update_qty(&mut self, id: &str, qty: i64) -> AppResult<()> {
        if self.menu.get(id).is_none() {
            return Err(AppError::UnknownItem(id.into()));
        }
        self.cart.update_qty(id, qty);
        self.confirm_pending = false;
        Ok(())
    }

    pub fn decrement(&mut self, id: &str) -> AppResult<()> {
        if self.menu.get(id).is_none() {
            return Err(AppError::UnknownItem(id.into()));
        }
        self.cart.decrement(id);
        self.confirm_pending = false;
        Ok(())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.error = None;
        self.confirm_pending = false;
    }

    // ---------------------------
    // Form
    // ---------------------------
    // Any edit closes the confirmation step; `reserve` has to run again.

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
        self.confirm_pending = false;
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.form.phone = phone.to_string();
        self.confirm_pending = false;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.form.notes = notes.to_string();
        self.confirm_pending = false;
    }

    pub fn set_mode(&mut self, mode: &str) -> AppResult<()> {
        self.confirm_pending = false;
        self.form.set_mode(mode)
    }

    pub fn set_date(&mut self, date: &str) -> AppResult<()> {
        self.confirm_pending = false;
        self.form.set_date(date, &self.defaults)
    }

    pub fn set_time(&mut self, time: &str) -> AppResult<()> {
        self.confirm_pending = false;
        self.form.set_time(time)
    }

    // ---------------------------
    // Reservation flow
    // ---------------------------

    /// "Reserve Now": validate and, on success, open the confirmation step.
    pub fn request_reservation(&mut self, now: DateTime<Local>) -> Result<(), ValidationError> {
        self.error = None;

        if let Err(e) = validate(&self.form, &self.cart, now) {
            self.error = Some(e);
            return Err(e);
        }

        self.confirm_pending = true;
        Ok(())
    }

    /// Leave the confirmation step without changes.
    pub fn back(&mut self) {
        self.confirm_pending = false;
    }

    /// Create the reservation, persist history, reset cart and contact fields.
    pub fn confirm_reservation(&mut self, now: DateTime<Local>) -> AppResult<Reservation> {
        if !self.confirm_pending {
            return Err(AppError::NothingToConfirm);
        }
        if let Err(e) = validate(&self.form, &self.cart, now) {
            self.confirm_pending = false;
            self.error = Some(e);
            return Err(e.into());
        }

        let items: Vec<ReservationItem> =
            self.cart.lines().iter().map(ReservationItem::from).collect();

        let reservation = Reservation {
            id: history::next_id(now, &self.reservations),
            name: self.form.name.clone(),
            phone: self.form.phone.clone(),
            mode: self.form.mode,
            date: self.form.date.clone(),
            time: self.form.time.clone(),
            notes: self.form.notes.clone(),
            items,
            total: self.cart.total(),
            created_at: now.to_rfc3339(),
            status: ReservationStatus::Reserved,
        };

        let mut next = Vec::with_capacity(self.reservations.len() + 1);
        next.push(reservation.clone());
        next.extend(self.reservations.iter().cloned());

        history::save(&mut self.store, &self.key, &next)?;
        self.reservations = next;

        self.store.audit(
            "reserve",
            &reservation.id,
            &format!(
                "{} ({}) {} on {} @ {}, total {}",
                reservation.name,
                reservation.phone,
                reservation.mode,
                reservation.date,
                reservation.time,
                reservation.total
            ),
        );

        self.cart.clear();
        self.form.reset_contact();
        self.confirm_pending = false;
        self.error = None;

        Ok(reservation)
    }

    /// Index of a reservation that can still be cancelled.
    pub fn check_cancellable(&self, id: &str) -> AppResult<usize> {
        let idx = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::ReservationNotFound(id.into()))?;

        if self.reservations[idx].is_cancelled() {
            return Err(AppError::AlreadyCancelled(id.into()));
        }
        Ok(idx)
    }

    /// Flip a reservation to `cancelled`. Nothing else changes.
    pub fn cancel_reservation(&mut self, id: &str) -> AppResult<&Reservation> {
        let idx = self.check_cancellable(id)?;

        let mut next = self.reservations.clone();
        next[idx].status = ReservationStatus::Cancelled;

        history::save(&mut self.store, &self.key, &next)?;
        self.reservations = next;

        let r = &self.reservations[idx];
        self.store.audit(
            "cancel",
            &r.id,
            &format!("Reservation {} for {} cancelled", r.id, r.name),
        );
        Ok(r)
    }
}
