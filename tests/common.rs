#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Days, Local};
use foodreserve::core::form::FormDefaults;
use foodreserve::core::session::Session;
use foodreserve::db::store::MemoryStore;
use foodreserve::models::menu::Menu;
use foodreserve::models::reservation::FulfillmentMode;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const KEY: &str = "food_reservations_v1";

/// Binary under test, with HOME pointed at a private directory so that no
/// user configuration file is picked up.
pub fn frs(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_foodreserve_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("foodreserve");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_foodreserve.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Tomorrow, always inside the default booking window.
pub fn tomorrow() -> String {
    (Local::now().date_naive() + Days::new(1))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn defaults() -> FormDefaults {
    FormDefaults {
        mode: FulfillmentMode::Pickup,
        today: Local::now().date_naive(),
        time: "12:30".to_string(),
        booking_window_days: 5,
    }
}

pub fn memory_session() -> Session<MemoryStore> {
    Session::open(MemoryStore::new(), KEY, Menu::sample(), defaults()).expect("open session")
}

/// Session with a valid form for tomorrow and an empty cart.
pub fn filled_session() -> Session<MemoryStore> {
    let mut s = memory_session();
    s.set_name("Asha");
    s.set_phone("9876543210");
    s.set_date(&tomorrow()).expect("tomorrow is bookable");
    s.set_time("12:30").expect("valid time");
    s
}

/// Initialize DB and add two reservations through the CLI.
pub fn init_db_with_data(name: &str, db_path: &str) {
    frs(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let date = tomorrow();

    frs(name)
        .args([
            "--db", db_path, "reserve", "--name", "Asha", "--phone", "9876543210", "--date",
            &date, "--time", "12:30", "--item", "m1:2", "--yes",
        ])
        .assert()
        .success();

    frs(name)
        .args([
            "--db",
            db_path,
            "reserve",
            "--name",
            "Ravi",
            "--phone",
            "9123456780",
            "--mode",
            "delivery",
            "--date",
            &date,
            "--time",
            "19:00",
            "--item",
            "m3",
            "--item",
            "m4:3",
            "--notes",
            "no onion",
            "--yes",
        ])
        .assert()
        .success();
}

/// Read the stored history straight from the database.
pub fn stored_history(db_path: &str) -> serde_json::Value {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let raw: String = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [KEY], |row| row.get(0))
        .expect("history row");
    serde_json::from_str(&raw).expect("valid json")
}
