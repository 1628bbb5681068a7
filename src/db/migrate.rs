//! Versioned schema migrations.
//!
//! Each applied migration leaves a `migration_applied` row in the `log`
//! table; a migration whose version is already logged is skipped.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_staff",
        description: "Created staff table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS staff (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            role        TEXT NOT NULL DEFAULT '',
            active      INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_punches",
        description: "Created punches table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id    TEXT NOT NULL,
            staff_name  TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('in','out')),
            timestamp   TEXT NOT NULL,
            reason      TEXT NOT NULL DEFAULT '',
            date_key    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date_staff ON punches(date_key, staff_id);
        "#,
    },
    Migration {
        version: "20250318_0003_add_photo_ref",
        description: "Added photo_ref to punches table",
        sql: "ALTER TABLE punches ADD COLUMN photo_ref TEXT;",
    },
    Migration {
        version: "20250402_0004_create_floor_tables",
        description: "Created floor_tables table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS floor_tables (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE COLLATE NOCASE,
            seats       INTEGER NOT NULL DEFAULT 4,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250420_0005_create_menu_items",
        description: "Created menu_items table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS menu_items (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE COLLATE NOCASE,
            category     TEXT NOT NULL DEFAULT '',
            full_price   INTEGER NOT NULL CHECK(full_price >= 0),
            half_price   INTEGER CHECK(half_price IS NULL OR half_price >= 0),
            available    INTEGER NOT NULL DEFAULT 1,
            external_id  TEXT,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250420_0006_create_orders",
        description: "Created orders and order_lines tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS orders (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            table_name  TEXT NOT NULL,
            staff_id    TEXT,
            status      TEXT NOT NULL DEFAULT 'open' CHECK(status IN ('open','closed')),
            created_at  TEXT NOT NULL,
            closed_at   TEXT
        );

        CREATE TABLE IF NOT EXISTS order_lines (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id    INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
            item_id     INTEGER NOT NULL,
            item_name   TEXT NOT NULL,
            portion     TEXT NOT NULL CHECK(portion IN ('half','full')),
            unit_price  INTEGER NOT NULL,
            quantity    INTEGER NOT NULL CHECK(quantity > 0)
        );

        CREATE INDEX IF NOT EXISTS idx_order_lines_order ON order_lines(order_id);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations in order.
///
/// Silent; returns `(version, description)` of each migration applied so
/// the caller decides whether to report them.
pub fn run_pending_migrations(
    conn: &Connection,
) -> AppResult<Vec<(&'static str, &'static str)>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push((m.version, m.description));
    }

    Ok(applied)
}
