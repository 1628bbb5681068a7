//! Unified application error type.
//! Every fallible module (db, core, cli, export) returns AppError so that
//! `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time format: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDateTime(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    #[error("Invalid table range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Staff / punch logic
    // ---------------------------
    #[error("Staff member not found: {0}")]
    StaffNotFound(String),

    #[error("Staff member is inactive: {0}")]
    StaffInactive(String),

    #[error("Staff member already exists: {0}")]
    DuplicateStaff(String),

    #[error("A reason is required when punching out")]
    MissingReason,

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    // ---------------------------
    // Floor tables
    // ---------------------------
    #[error("Table not found: {0}")]
    TableNotFound(String),

    // ---------------------------
    // Menu / orders
    // ---------------------------
    #[error("Invalid price: {0} (expected e.g. 12 or 12.50)")]
    InvalidPrice(String),

    #[error("Menu item has no price: {0}")]
    MissingPrice(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Menu item already exists: {0}")]
    DuplicateMenuItem(String),

    #[error("Menu item is not available: {0}")]
    MenuItemUnavailable(String),

    #[error("'{item}' has no {portion} portion")]
    PortionUnavailable { item: String, portion: &'static str },

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Order #{0} is closed")]
    OrderClosed(i64),

    #[error("Order line not found: {0}")]
    OrderLineNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
