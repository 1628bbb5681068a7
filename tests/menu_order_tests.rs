use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rstaffclock::core::menu::{normalize_raw, parse_menu_json, parse_price};
use rstaffclock::core::orders::price_line;
use rstaffclock::errors::AppError;
use rstaffclock::models::menu_item::{MenuItem, Portion, RawMenuItem};
use rstaffclock::models::order::{Order, OrderStatus};
use rstaffclock::utils::formatting::format_price;
use std::fs;

mod common;
use common::{init_db_with_staff, rsc, setup_test_db, temp_out};

fn raw(json: &str) -> RawMenuItem {
    serde_json::from_str(json).expect("raw menu item")
}

fn dish(half: Option<i64>) -> MenuItem {
    MenuItem {
        id: 7,
        name: "Paneer Tikka".to_string(),
        category: "Starters".to_string(),
        full_price: 1200,
        half_price: half,
        available: true,
        external_id: None,
        created_at: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Prices and import normalization
// ---------------------------------------------------------------------------

#[test]
fn test_parse_price_accepts_common_forms() {
    assert_eq!(parse_price("12").unwrap(), 1200);
    assert_eq!(parse_price("12.5").unwrap(), 1250);
    assert_eq!(parse_price("12,50").unwrap(), 1250);
    assert_eq!(parse_price(" 0.05 ").unwrap(), 5);
}

#[test]
fn test_parse_price_rejects_garbage() {
    for bad in ["", "abc", "-3", "12.505", "1.2.3", "99999999999999999999"] {
        assert!(
            matches!(parse_price(bad), Err(AppError::InvalidPrice(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_normalize_prefers_full_price_over_legacy_price() {
    let item = normalize_raw(raw(
        r#"{"id": "m-1", "name": " Dal Makhani ", "price": 8.0, "fullPrice": 9.5, "halfPrice": 5.25}"#,
    ))
    .unwrap();

    assert_eq!(item.name, "Dal Makhani");
    assert_eq!(item.full_price, 950);
    assert_eq!(item.half_price, Some(525));
    assert_eq!(item.external_id.as_deref(), Some("m-1"));
    assert!(item.available);
}

#[test]
fn test_normalize_legacy_record_with_underscore_id() {
    let item = normalize_raw(raw(
        r#"{"_id": 42, "name": "Lassi", "price": 3.99, "category": "Drinks", "available": false}"#,
    ))
    .unwrap();

    assert_eq!(item.full_price, 399);
    assert_eq!(item.half_price, None);
    assert_eq!(item.external_id.as_deref(), Some("42"));
    assert_eq!(item.category, "Drinks");
    assert!(!item.available);
}

#[test]
fn test_normalize_requires_name_and_price() {
    assert!(matches!(
        normalize_raw(raw(r#"{"name": "Naan"}"#)),
        Err(AppError::MissingPrice(name)) if name == "Naan"
    ));
    assert!(matches!(
        normalize_raw(raw(r#"{"price": 2.0}"#)),
        Err(AppError::InvalidField { .. })
    ));
    assert!(matches!(
        normalize_raw(raw(r#"{"name": "Naan", "price": -1.0}"#)),
        Err(AppError::InvalidPrice(_))
    ));
}

#[test]
fn test_parse_menu_json_handles_mixed_records() {
    let items = parse_menu_json(
        r#"[
            {"_id": "a1", "name": "Samosa", "price": 2.5},
            {"id": "b2", "name": "Biryani", "fullPrice": 11, "halfPrice": 6.5}
        ]"#,
    )
    .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].full_price, 250);
    assert_eq!(items[1].half_price, Some(650));

    assert!(parse_menu_json("{not json").is_err());
}

// ---------------------------------------------------------------------------
// Order lines and totals
// ---------------------------------------------------------------------------

#[test]
fn test_price_line_uses_portion_price() {
    let item = dish(Some(700));

    let full = price_line(1, &item, Portion::Full, 2).unwrap();
    assert_eq!(full.unit_price, 1200);
    assert_eq!(full.line_total(), 2400);

    let half = price_line(1, &item, Portion::Half, 3).unwrap();
    assert_eq!(half.unit_price, 700);
    assert_eq!(half.line_total(), 2100);
    assert_eq!(half.item_name, "Paneer Tikka");
}

#[test]
fn test_price_line_rejects_missing_portion_hidden_item_and_zero_qty() {
    let no_half = dish(None);
    assert!(matches!(
        price_line(1, &no_half, Portion::Half, 1),
        Err(AppError::PortionUnavailable { portion: "half", .. })
    ));

    let mut hidden = dish(Some(700));
    hidden.available = false;
    assert!(matches!(
        price_line(1, &hidden, Portion::Full, 1),
        Err(AppError::MenuItemUnavailable(_))
    ));

    assert!(matches!(
        price_line(1, &dish(None), Portion::Full, 0),
        Err(AppError::InvalidField { field: "quantity", .. })
    ));
}

#[test]
fn test_order_total_sums_lines() {
    let item = dish(Some(700));
    let order = Order {
        id: 1,
        table_name: "T1".to_string(),
        staff_id: None,
        status: OrderStatus::Open,
        created_at: String::new(),
        closed_at: None,
        lines: vec![
            price_line(1, &item, Portion::Full, 1).unwrap(),
            price_line(1, &item, Portion::Half, 2).unwrap(),
        ],
    };

    assert_eq!(order.total(), 2600);
    assert_eq!(format_price(order.total()), "26.00");
    assert_eq!(format_price(5), "0.05");
}

// ---------------------------------------------------------------------------
// CLI flows
// ---------------------------------------------------------------------------

#[test]
fn test_menu_add_list_update_delete() {
    let db_path = setup_test_db("menu_crud");
    init_db_with_staff(&db_path);

    rsc()
        .args([
            "--db", &db_path, "menu", "add", "Butter Chicken", "--full", "14.50", "--half", "8",
            "--category", "Mains",
        ])
        .assert()
        .success()
        .stdout(contains("Menu item #1 Butter Chicken added"));

    rsc()
        .args(["--db", &db_path, "menu", "add", "butter chicken", "--full", "1"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsc()
        .args(["--db", &db_path, "menu", "add", "Kulfi", "--full", "4.x"])
        .assert()
        .failure()
        .stderr(contains("Invalid price"));

    rsc()
        .args(["--db", &db_path, "menu", "list"])
        .assert()
        .success()
        .stdout(contains("Butter Chicken").and(contains("14.50")).and(contains("8.00")));

    rsc()
        .args(["--db", &db_path, "menu", "update", "1", "--full", "15", "--no-half", "--hide"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "menu", "list"])
        .assert()
        .success()
        .stdout(contains("The menu is empty"));

    rsc()
        .args(["--db", &db_path, "menu", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("15.00").and(contains("8.00").not()));

    rsc()
        .args(["--db", &db_path, "menu", "del", "1"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "menu", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Menu item not found"));
}

#[test]
fn test_menu_import_normalizes_and_skips_existing() {
    let db_path = setup_test_db("menu_import");
    let file = temp_out("menu_import", "json");
    init_db_with_staff(&db_path);

    fs::write(
        &file,
        r#"[
            {"_id": "old-1", "name": "Samosa", "price": 2.5, "category": "Starters"},
            {"id": "new-2", "name": "Biryani", "fullPrice": 11, "halfPrice": 6.5, "category": "Mains"}
        ]"#,
    )
    .expect("write menu file");

    rsc()
        .args(["--db", &db_path, "menu", "import", &file])
        .assert()
        .success()
        .stdout(contains("Imported 2 menu item(s)"));

    rsc()
        .args(["--db", &db_path, "menu", "import", &file])
        .assert()
        .success()
        .stdout(contains("Imported 0 menu item(s)"))
        .stderr(contains("Skipped 2"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (full, half, ext): (i64, Option<i64>, Option<String>) = conn
        .query_row(
            "SELECT full_price, half_price, external_id FROM menu_items WHERE name = 'Biryani'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("biryani row");
    assert_eq!((full, half, ext.as_deref()), (1100, Some(650), Some("new-2")));

    let legacy: Option<String> = conn
        .query_row(
            "SELECT external_id FROM menu_items WHERE name = 'Samosa'",
            [],
            |row| row.get(0),
        )
        .expect("samosa row");
    assert_eq!(legacy.as_deref(), Some("old-1"));
}

#[test]
fn test_order_flow_with_portions_and_total() {
    let db_path = setup_test_db("order_flow");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "tables", "generate", "1-2"])
        .assert()
        .success();
    rsc()
        .args(["--db", &db_path, "menu", "add", "Biryani", "--full", "11", "--half", "6.50"])
        .assert()
        .success();
    rsc()
        .args(["--db", &db_path, "menu", "add", "Naan", "--full", "2"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "order", "open", "T9"])
        .assert()
        .failure()
        .stderr(contains("Table not found"));

    rsc()
        .args(["--db", &db_path, "order", "open", "T2", "--staff", "S1"])
        .assert()
        .success()
        .stdout(contains("Order #1 opened for T2"));

    rsc()
        .args(["--db", &db_path, "order", "add", "1", "1", "--portion", "half", "--qty", "2"])
        .assert()
        .success()
        .stdout(contains("Total: 13.00"));

    // same dish and portion tops up the existing line
    rsc()
        .args(["--db", &db_path, "order", "add", "1", "1", "--portion", "half"])
        .assert()
        .success()
        .stdout(contains("Total: 19.50"));

    rsc()
        .args(["--db", &db_path, "order", "add", "1", "2", "--portion", "half"])
        .assert()
        .failure()
        .stderr(contains("has no half portion"));

    rsc()
        .args(["--db", &db_path, "order", "add", "1", "2", "-q", "3"])
        .assert()
        .success()
        .stdout(contains("Total: 25.50"));

    rsc()
        .args(["--db", &db_path, "order", "show", "1"])
        .assert()
        .success()
        .stdout(
            contains("Biryani")
                .and(contains("half"))
                .and(contains("19.50"))
                .and(contains("Naan"))
                .and(contains("6.00"))
                .and(contains("Total: 25.50")),
        );

    rsc()
        .args(["--db", &db_path, "order", "remove", "1", "2"])
        .assert()
        .success()
        .stdout(contains("Total: 19.50"));

    rsc()
        .args(["--db", &db_path, "order", "close", "1"])
        .assert()
        .success()
        .stdout(contains("Order #1 closed. Total: 19.50"));

    rsc()
        .args(["--db", &db_path, "order", "add", "1", "2"])
        .assert()
        .failure()
        .stderr(contains("Order #1 is closed"));

    rsc()
        .args(["--db", &db_path, "order", "list"])
        .assert()
        .success()
        .stdout(contains("No orders"));

    rsc()
        .args(["--db", &db_path, "order", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("T2").and(contains("closed")).and(contains("19.50")));
}

#[test]
fn test_order_lines_keep_price_after_menu_change() {
    let db_path = setup_test_db("order_snapshot");
    init_db_with_staff(&db_path);

    rsc()
        .args(["--db", &db_path, "tables", "generate", "1"])
        .assert()
        .success();
    rsc()
        .args(["--db", &db_path, "menu", "add", "Thali", "--full", "10"])
        .assert()
        .success();
    rsc()
        .args(["--db", &db_path, "order", "open", "T1"])
        .assert()
        .success();
    rsc()
        .args(["--db", &db_path, "order", "add", "1", "1"])
        .assert()
        .success();

    rsc()
        .args(["--db", &db_path, "menu", "update", "1", "--full", "12"])
        .assert()
        .success();

    // new price → new line, old line untouched
    rsc()
        .args(["--db", &db_path, "order", "add", "1", "1"])
        .assert()
        .success()
        .stdout(contains("Total: 22.00"));

    rsc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("menu_add").and(contains("order_open")).and(contains("order_add")));
}
