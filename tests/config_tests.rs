use rstaffclock::config::Config;
use rstaffclock::utils::path::{expand_tilde, is_absolute};
use std::env;
use std::fs;

#[test]
fn test_expand_tilde_uses_home_dir() {
    let home = dirs::home_dir().expect("home dir");

    assert_eq!(expand_tilde("~"), home);
    assert_eq!(expand_tilde("~/data/clock.sqlite"), home.join("data/clock.sqlite"));
    // only a leading "~/" is expanded
    assert_eq!(expand_tilde("a/~/b").to_string_lossy(), "a/~/b");
    assert_eq!(expand_tilde("~other").to_string_lossy(), "~other");
}

#[test]
fn test_is_absolute_after_expansion() {
    assert!(is_absolute("~/out.csv"));
    assert!(is_absolute(&env::temp_dir().join("out.csv").to_string_lossy()));
    assert!(!is_absolute("out.csv"));
    assert!(!is_absolute("./reports/out.csv"));
}

#[test]
fn test_load_from_expands_database_path() {
    let path = env::temp_dir().join("rstaffclock_tilde_config.conf");
    fs::write(&path, "database: ~/clock/test.sqlite\nseparator_char: \"=\"\n").expect("write config");

    let cfg = Config::load_from(&path).expect("load config");
    let home = dirs::home_dir().expect("home dir");

    assert_eq!(cfg.database, home.join("clock/test.sqlite").to_string_lossy());
    assert_eq!(cfg.separator_char, "=");
    assert_eq!(cfg.default_table_seats, 4);

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let path = env::temp_dir().join("rstaffclock_no_such_config.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).expect("defaults");
    assert_eq!(cfg.default_in_reason, "Shift start");
    assert_eq!(cfg.default_table_prefix, "T");
}
