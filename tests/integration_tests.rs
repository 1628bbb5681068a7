use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

use std::env;
use std::fs;

mod common;
use common::{init_db_with_staff, punch, rsc, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rsc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized").and(contains("Migration applied")));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in [
        "staff",
        "punches",
        "floor_tables",
        "menu_items",
        "orders",
        "order_lines",
        "log",
    ] {
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query");
        assert_eq!(n, 1, "missing table {}", table);
    }

    // a second init applies nothing new
    rsc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_first_use_without_init_keeps_stdout_clean() {
    let db_path = setup_test_db("fresh_status");

    rsc()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not())
        .stdout(contains("No staff members registered"));

    // the schema was still brought up to date
    rsc()
        .args(["--db", &db_path, "staff", "add", "S9", "Zoe"])
        .assert()
        .success();
}

#[test]
fn test_db_path_with_tilde_resolves_to_home() {
    let home = env::temp_dir().join("rstaffclock_tilde_home");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create fake home");

    rsc()
        .env("HOME", &home)
        .args(["--db", "~/tilde.sqlite", "--test", "init"])
        .assert()
        .success();

    rsc()
        .env("HOME", &home)
        .args(["--db", "~/tilde.sqlite", "staff", "add", "S1", "Alice"])
        .assert()
        .success();

    let db_file = home.join("tilde.sqlite");
    assert!(db_file.exists(), "database not created under HOME");
    assert!(!std::path::Path::new("~").exists(), "literal ~ directory created");

    let conn = rusqlite::Connection::open(&db_file).expect("open db");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM staff WHERE id = 'S1'", [], |row| {
            row.get(0)
        })
        .expect("query");
    assert_eq!(n, 1);

    for (kind, at) in [("--in", "2025-03-10 09:00"), ("--out", "2025-03-10 17:00")] {
        rsc()
            .env("HOME", &home)
            .args([
                "--db",
                "~/tilde.sqlite",
                "punch",
                "S1",
                kind,
                "--at",
                at,
                "--reason",
                "End of shift",
            ])
            .assert()
            .success();
    }

    rsc()
        .env("HOME", &home)
        .args([
            "--db",
            "~/tilde.sqlite",
            "export",
            "--format",
            "csv",
            "--file",
            "~/events.csv",
            "--events",
            "--range",
            "2025",
        ])
        .assert()
        .success();
    assert!(home.join("events.csv").exists(), "export not written under HOME");
}

#[test]
fn test_staff_add_list_and_duplicate() {
    let db_path = setup_test_db("staff_crud");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "staff", "list"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Bob")).and(contains("waiter")));

    rsc()
        .args(["--db", &db_path, "staff", "add", "S1", "Someone"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_punch_in_out_and_summary() {
    let db_path = setup_test_db("punch_summary");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-03-10 09:00", None);
    punch(&db_path, "S1", "out", "2025-03-10 17:00", Some("End of shift"));

    rsc()
        .args(["--db", &db_path, "summary", "--period", "2025-03-10"])
        .assert()
        .success()
        .stdout(
            contains("Alice")
                .and(contains("09:00"))
                .and(contains("17:00"))
                .and(contains("8.00")),
        );
}

#[test]
fn test_punch_out_requires_reason() {
    let db_path = setup_test_db("punch_reason");
    init_db_with_staff(&db_path);

    rsc()
        .args([
            "--db",
            &db_path,
            "punch",
            "S1",
            "--out",
            "--at",
            "2025-03-10 17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("reason is required"));

    rsc()
        .args([
            "--db",
            &db_path,
            "punch",
            "S1",
            "--out",
            "--reason",
            "   ",
            "--at",
            "2025-03-10 17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("reason is required"));
}

#[test]
fn test_punch_toggles_from_current_status() {
    let db_path = setup_test_db("punch_toggle");
    init_db_with_staff(&db_path);

    // no event yet → punch in with the default reason
    rsc()
        .args(["--db", &db_path, "punch", "S2", "--at", "2025-03-11 10:00"])
        .assert()
        .success()
        .stdout(contains("Punch In").and(contains("Shift start")));

    // currently in → next punch is an out, which needs a reason
    rsc()
        .args(["--db", &db_path, "punch", "S2", "--at", "2025-03-11 15:00"])
        .assert()
        .failure()
        .stderr(contains("reason is required"));

    rsc()
        .args([
            "--db",
            &db_path,
            "punch",
            "S2",
            "--reason",
            "Break",
            "--at",
            "2025-03-11 15:00",
        ])
        .assert()
        .success()
        .stdout(contains("Punch Out"));

    rsc()
        .args(["--db", &db_path, "status", "--date", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("Bob").and(contains("Break")).and(contains("15:00")));
}

#[test]
fn test_status_shows_none_for_staff_without_punches() {
    let db_path = setup_test_db("status_none");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-03-12 09:00", None);

    let out = rsc()
        .args(["--db", &db_path, "status", "--date", "2025-03-12"])
        .output()
        .expect("run status");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let alice = stdout
        .lines()
        .find(|l| l.contains("Alice"))
        .expect("Alice row");
    assert!(alice.contains("in"));
    assert!(alice.contains("Punch Out"));

    let bob = stdout.lines().find(|l| l.contains("Bob")).expect("Bob row");
    assert!(bob.contains("none"));
    assert!(bob.contains("Punch In"));
}

#[test]
fn test_punch_unknown_or_inactive_staff_fails() {
    let db_path = setup_test_db("punch_unknown");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "punch", "S9", "--in"])
        .assert()
        .failure()
        .stderr(contains("Staff member not found"));

    rsc()
        .args(["--db", &db_path, "staff", "del", "S2"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "punch", "S2", "--in"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    rsc()
        .args(["--db", &db_path, "staff", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Bob"));
}

#[test]
fn test_punch_rejects_bad_timestamp() {
    let db_path = setup_test_db("punch_bad_ts");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "punch", "S1", "--in", "--at", "10/03/2025 9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));
}

#[test]
fn test_summary_multiple_sessions_and_days() {
    let db_path = setup_test_db("summary_multi");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-04-01 09:00", None);
    punch(&db_path, "S1", "out", "2025-04-01 12:00", Some("Lunch"));
    punch(&db_path, "S1", "in", "2025-04-01 13:00", None);
    punch(&db_path, "S1", "out", "2025-04-01 17:00", Some("End of shift"));
    punch(&db_path, "S2", "in", "2025-04-02 18:00", None);
    punch(&db_path, "S2", "out", "2025-04-02 23:30", Some("Close"));

    rsc()
        .args(["--db", &db_path, "summary", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(
            contains("2025-04-01")
                .and(contains("7.00"))
                .and(contains("2025-04-02"))
                .and(contains("5.50"))
                .and(contains("Days: 2"))
                .and(contains("12.50")),
        );

    rsc()
        .args([
            "--db",
            &db_path,
            "summary",
            "--period",
            "2025-04",
            "--staff",
            "S2",
        ])
        .assert()
        .success()
        .stdout(contains("Bob").and(contains("Alice").not()));
}

#[test]
fn test_summary_counts_distinct_days() {
    let db_path = setup_test_db("summary_days");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-05-06 09:00", None);
    punch(&db_path, "S1", "out", "2025-05-06 13:00", Some("End of shift"));
    punch(&db_path, "S2", "in", "2025-05-06 17:00", None);
    punch(&db_path, "S2", "out", "2025-05-06 23:00", Some("Close"));

    rsc()
        .args(["--db", &db_path, "summary", "--period", "2025-05-06"])
        .assert()
        .success()
        .stdout(
            contains("Days: 1")
                .and(contains("Staff-days: 2"))
                .and(contains("10.00")),
        );
}

#[test]
fn test_events_lists_raw_punches() {
    let db_path = setup_test_db("events_list");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-05-02 08:30", None);
    punch(&db_path, "S1", "out", "2025-05-02 16:00", Some("Done"));

    rsc()
        .args(["--db", &db_path, "events", "--period", "2025-05-02"])
        .assert()
        .success()
        .stdout(
            contains("08:30:00")
                .and(contains("16:00:00"))
                .and(contains("Shift start"))
                .and(contains("Done")),
        );

    rsc()
        .args(["--db", &db_path, "events", "--period", "2025-05-03"])
        .assert()
        .success()
        .stdout(contains("No punches"));
}

#[test]
fn test_tables_generate_skips_existing_and_lists_naturally() {
    let db_path = setup_test_db("tables_generate");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "tables", "generate", "1-3,10", "--prefix", "T"])
        .assert()
        .success()
        .stdout(contains("Created 4 table(s): T1, T2, T3, T10"));

    rsc()
        .args(["--db", &db_path, "tables", "generate", "2-4", "--prefix", "T"])
        .assert()
        .success()
        .stdout(contains("Created 1 table(s): T4"));

    rsc()
        .args(["--db", &db_path, "tables", "generate", "5-1"])
        .assert()
        .failure()
        .stderr(contains("Invalid table range"));

    let out = rsc()
        .args(["--db", &db_path, "tables", "list"])
        .output()
        .expect("list tables");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .filter(|w| w.starts_with('T') && w[1..].chars().all(|c| c.is_ascii_digit()))
        .collect();
    assert_eq!(names, vec!["T1", "T2", "T3", "T4", "T10"]);

    rsc()
        .args(["--db", &db_path, "tables", "del", "T4"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "tables", "del", "T4"])
        .assert()
        .failure()
        .stderr(contains("Table not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_staff(&db_path);

    punch(&db_path, "S1", "in", "2025-06-01 09:00", None);

    rsc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("staff_add")
                .and(contains("punch_in"))
                .and(contains("migration_applied")),
        );
}
