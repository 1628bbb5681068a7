use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema creation and upgrades are owned by the migration engine.
///
/// Returns the `(version, description)` of every migration applied.
pub fn init_db(conn: &Connection) -> AppResult<Vec<(&'static str, &'static str)>> {
    run_pending_migrations(conn)
}
