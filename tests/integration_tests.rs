use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{frs, init_db_with_data, setup_test_db, stored_history, tomorrow};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    frs("init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_menu_lists_all_dishes() {
    frs("menu")
        .arg("menu")
        .assert()
        .success()
        .stdout(contains("Hyderabadi Biryani (Chicken)"))
        .stdout(contains("Paneer Butter Masala"))
        .stdout(contains("Street-style Dosa"))
        .stdout(contains("Gulab Jamun (2pc)"))
        .stdout(contains("₹220"));
}

#[test]
fn test_dates_lists_booking_window() {
    frs("dates")
        .arg("dates")
        .assert()
        .success()
        .stdout(contains(tomorrow()));
}

#[test]
fn test_reserve_and_list() {
    let db_path = setup_test_db("reserve_list");
    init_db_with_data("reserve_list", &db_path);

    frs("reserve_list")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Asha"))
        .stdout(contains("Ravi"))
        .stdout(contains("delivery"))
        .stdout(contains("₹440"))
        .stdout(contains("₹270"))
        .stdout(contains("3 x Gulab Jamun (2pc)"));

    let history = stored_history(&db_path);
    let list = history.as_array().expect("array");
    assert_eq!(list.len(), 2);
    // newest first
    assert_eq!(list[0]["name"], "Ravi");
    assert_eq!(list[1]["name"], "Asha");
    assert_eq!(list[0]["notes"], "no onion");
}

#[test]
fn test_reserve_rejects_bad_phone() {
    let db_path = setup_test_db("bad_phone");

    frs("bad_phone")
        .args([
            "--db", &db_path, "reserve", "--name", "Asha", "--phone", "12345", "--item", "m1",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid 10-digit phone number."));

    frs("bad_phone")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No reservations yet."));
}

#[test]
fn test_reserve_rejects_empty_cart_and_blank_name() {
    let db_path = setup_test_db("empty_cart");

    frs("empty_cart")
        .args([
            "--db", &db_path, "reserve", "--name", "  ", "--phone", "9876543210", "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("Please enter your name."));

    frs("empty_cart")
        .args([
            "--db", &db_path, "reserve", "--name", "Asha", "--phone", "9876543210", "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("Cart is empty. Add items to reserve."));
}

#[test]
fn test_reserve_rejects_unknown_item() {
    let db_path = setup_test_db("unknown_item");

    frs("unknown_item")
        .args([
            "--db", &db_path, "reserve", "--name", "Asha", "--phone", "9876543210", "--item",
            "m42", "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("No menu item with id 'm42'"));
}

#[test]
fn test_reserve_declined_saves_nothing() {
    let db_path = setup_test_db("declined");
    let date = tomorrow();

    frs("declined")
        .args([
            "--db", &db_path, "reserve", "--name", "Asha", "--phone", "9876543210", "--date",
            &date, "--item", "m2",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Confirm Reservation"))
        .stdout(contains("Reservation not saved."));

    frs("declined")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No reservations yet."));
}

#[test]
fn test_cancel_flips_status() {
    let db_path = setup_test_db("cancel");
    init_db_with_data("cancel", &db_path);

    let before = stored_history(&db_path);
    let id = before[1]["id"].as_str().expect("id").to_string();

    frs("cancel")
        .args(["--db", &db_path, "cancel", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("cancelled"));

    let after = stored_history(&db_path);
    assert_eq!(after[1]["status"], "cancelled");
    assert_eq!(after[0], before[0]);

    let mut expected = before[1].clone();
    expected["status"] = serde_json::json!("cancelled");
    assert_eq!(after[1], expected);

    // second time: nothing left to cancel
    frs("cancel")
        .args(["--db", &db_path, "cancel", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("already cancelled"));

    frs("cancel")
        .args(["--db", &db_path, "list", "--status", "cancelled"])
        .assert()
        .success()
        .stdout(contains("Asha"))
        .stdout(contains("Ravi").not());
}

#[test]
fn test_cancel_prompt_declined() {
    let db_path = setup_test_db("cancel_declined");
    init_db_with_data("cancel_declined", &db_path);

    let id = stored_history(&db_path)[0]["id"]
        .as_str()
        .expect("id")
        .to_string();

    frs("cancel_declined")
        .args(["--db", &db_path, "cancel", &id])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(stored_history(&db_path)[0]["status"], "reserved");
}

#[test]
fn test_cancel_unknown_reservation() {
    let db_path = setup_test_db("cancel_unknown");

    frs("cancel_unknown")
        .args(["--db", &db_path, "cancel", "res_1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No reservation with id 'res_1'"));
}

#[test]
fn test_show_reservation() {
    let db_path = setup_test_db("show");
    init_db_with_data("show", &db_path);

    let id = stored_history(&db_path)[0]["id"]
        .as_str()
        .expect("id")
        .to_string();

    frs("show")
        .args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("Ravi"))
        .stdout(contains("9123456780"))
        .stdout(contains("1 x Street-style Dosa"))
        .stdout(contains("no onion"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log");
    init_db_with_data("log", &db_path);

    frs("log")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("reserve"));
}

#[test]
fn test_shell_session() {
    let db_path = setup_test_db("shell");
    let date = tomorrow();

    let script = format!(
        "add m1\nadd m1\nqty m1 3\ndec m1\nadd m4\nname Kiran\nphone 99999\nreserve\n\
         phone 9999999999\ndate {date}\ntime 13:15\nmode delivery\nreserve\nconfirm\nlist\nquit\n"
    );

    frs("shell")
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Please enter a valid 10-digit phone number."))
        .stdout(contains("Confirm Reservation"))
        .stdout(contains("Reservation saved!"))
        .stdout(contains("Kiran"));

    let history = stored_history(&db_path);
    assert_eq!(history[0]["total"], 2 * 220 + 60);
    assert_eq!(history[0]["mode"], "delivery");
    assert_eq!(history[0]["time"], "13:15");
}

#[test]
fn test_shell_cancel_and_eof() {
    let db_path = setup_test_db("shell_cancel");
    init_db_with_data("shell_cancel", &db_path);

    let id = stored_history(&db_path)[1]["id"]
        .as_str()
        .expect("id")
        .to_string();

    frs("shell_cancel")
        .args(["--db", &db_path, "shell"])
        .write_stdin(format!("cancel {id}\ny\nbogus\n"))
        .assert()
        .success()
        .stdout(contains("Reservation"))
        .stderr(contains("Unknown command 'bogus'"));

    assert_eq!(stored_history(&db_path)[1]["status"], "cancelled");
}

#[test]
fn test_shell_confirm_after_clear_saves_nothing() {
    let db_path = setup_test_db("shell_stale_confirm");
    init_db_with_data("shell_stale_confirm", &db_path);
    let date = tomorrow();

    let script = format!(
        "name Kiran\nphone 9999999999\ndate {date}\nadd m1\nreserve\nclear\nname\nconfirm\nquit\n"
    );

    frs("shell_stale_confirm")
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Confirm Reservation"))
        .stdout(contains("Reservation saved!").not())
        .stderr(contains("Nothing to confirm"));

    let history = stored_history(&db_path);
    assert_eq!(history.as_array().map(Vec::len), Some(2));
    assert!(history.as_array().unwrap().iter().all(|r| r["name"] != "Kiran"));
}
