mod common;

use chrono::{Duration, Local};
use common::{defaults, tomorrow};
use foodreserve::core::form::ReservationForm;
use foodreserve::core::validate::{ValidationError, is_valid_phone, validate};
use foodreserve::models::cart::Cart;
use foodreserve::models::menu::Menu;
use foodreserve::utils::time::local_instant;

fn valid_form() -> ReservationForm {
    let mut form = ReservationForm::new(&defaults());
    form.name = "Asha".into();
    form.phone = "9876543210".into();
    form.date = tomorrow();
    form.time = "12:30".into();
    form
}

fn one_item_cart() -> Cart {
    let menu = Menu::sample();
    let mut cart = Cart::new();
    cart.add(menu.get("m2").expect("sample item"));
    cart
}

#[test]
fn test_valid_form_passes() {
    assert_eq!(validate(&valid_form(), &one_item_cart(), Local::now()), Ok(()));
}

#[test]
fn test_empty_or_blank_name_rejected() {
    let mut form = valid_form();
    form.name = "   ".into();
    assert_eq!(
        validate(&form, &one_item_cart(), Local::now()),
        Err(ValidationError::MissingName)
    );
}

#[test]
fn test_first_failure_wins() {
    let mut form = valid_form();
    form.name = String::new();
    form.phone = "123".into();
    form.date = "nonsense".into();

    // everything is wrong, the name check comes first
    assert_eq!(
        validate(&form, &Cart::new(), Local::now()),
        Err(ValidationError::MissingName)
    );

    form.name = "Asha".into();
    assert_eq!(
        validate(&form, &Cart::new(), Local::now()),
        Err(ValidationError::InvalidPhone)
    );

    form.phone = "9876543210".into();
    assert_eq!(
        validate(&form, &Cart::new(), Local::now()),
        Err(ValidationError::EmptyCart)
    );

    assert_eq!(
        validate(&form, &one_item_cart(), Local::now()),
        Err(ValidationError::InvalidDateTime)
    );
}

#[test]
fn test_phone_must_be_exactly_ten_ascii_digits() {
    assert!(is_valid_phone("0123456789"));

    assert!(!is_valid_phone(""));
    assert!(!is_valid_phone("123456789"));
    assert!(!is_valid_phone("12345678901"));
    assert!(!is_valid_phone("98765 43210"));
    assert!(!is_valid_phone(" 9876543210"));
    assert!(!is_valid_phone("+919876543210"));
    assert!(!is_valid_phone("98765abcde"));
    // Arabic-Indic digits are digits, but not the ones a phone field expects
    assert!(!is_valid_phone("٠١٢٣٤٥٦٧٨٩"));
}

#[test]
fn test_phone_error_message() {
    let mut form = valid_form();
    form.phone = "12345".into();
    let err = validate(&form, &one_item_cart(), Local::now()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number.");
}

#[test]
fn test_empty_cart_rejected() {
    let err = validate(&valid_form(), &Cart::new(), Local::now()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyCart);
    assert_eq!(err.to_string(), "Cart is empty. Add items to reserve.");
}

#[test]
fn test_invalid_date_or_time_rejected() {
    let cart = one_item_cart();

    let mut form = valid_form();
    form.date = "2025-13-40".into();
    assert_eq!(
        validate(&form, &cart, Local::now()),
        Err(ValidationError::InvalidDateTime)
    );

    let mut form = valid_form();
    form.time = "25:99".into();
    assert_eq!(
        validate(&form, &cart, Local::now()),
        Err(ValidationError::InvalidDateTime)
    );

    let mut form = valid_form();
    form.time = String::new();
    assert_eq!(
        validate(&form, &cart, Local::now()),
        Err(ValidationError::InvalidDateTime)
    );
}

#[test]
fn test_past_time_tolerance_is_sixty_seconds() {
    let form = valid_form();
    let cart = one_item_cart();
    let selected = local_instant(&form.date, &form.time).expect("valid instant");

    // 30 s after the requested time still counts as "now"
    assert_eq!(
        validate(&form, &cart, selected + Duration::seconds(30)),
        Ok(())
    );
    assert_eq!(
        validate(&form, &cart, selected + Duration::seconds(60)),
        Ok(())
    );

    let err = validate(&form, &cart, selected + Duration::seconds(61)).unwrap_err();
    assert_eq!(err, ValidationError::PastTime);
    assert_eq!(err.to_string(), "Please pick a future time.");
}

#[test]
fn test_seconds_in_time_are_accepted() {
    let mut form = valid_form();
    form.time = "12:30:15".into();
    assert_eq!(validate(&form, &one_item_cart(), Local::now()), Ok(()));
}
