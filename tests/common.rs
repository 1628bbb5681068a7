#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rstaffclock::models::punch_event::PunchEvent;
use rstaffclock::models::punch_type::PunchType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsc() -> Command {
    cargo_bin_cmd!("rstaffclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstaffclock.sqlite", name));
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

/// Initialize the DB and register two staff members (S1 Alice, S2 Bob).
pub fn init_db_with_staff(db_path: &str) {
    rsc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsc()
        .args(["--db", db_path, "staff", "add", "S1", "Alice", "--role", "waiter"])
        .assert()
        .success();

    rsc()
        .args(["--db", db_path, "staff", "add", "S2", "Bob", "--role", "chef"])
        .assert()
        .success();
}

/// Punch with an explicit time.
pub fn punch(db_path: &str, staff: &str, kind: &str, at: &str, reason: Option<&str>) {
    let flag = format!("--{}", kind);
    let mut args = vec!["--db", db_path, "punch", staff, flag.as_str(), "--at", at];
    if let Some(r) = reason {
        args.push("--reason");
        args.push(r);
    }
    rsc().args(&args).assert().success();
}

pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
    NaiveDateTime::parse_from_str(&format!("{} {}", d, time), "%Y-%m-%d %H:%M").expect("time")
}

/// In-memory event for library-level tests.
pub fn ev(staff: &str, date: &str, kind: PunchType, time: &str) -> PunchEvent {
    let reason = if kind.is_in() { "Shift start" } else { "End of shift" };
    let mut e = PunchEvent::new(staff, &format!("Name {}", staff), kind, ts(date, time), reason, None);
    e.date_key = date.to_string();
    e
}
