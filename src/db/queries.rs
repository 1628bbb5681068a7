use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::floor_table::FloorTable;
use crate::models::menu_item::{MenuItem, NewMenuItem, Portion};
use crate::models::order::{Order, OrderLine, OrderStatus};
use crate::models::punch_event::{PunchEvent, TIMESTAMP_FORMAT, date_key_for};
use crate::models::punch_type::PunchType;
use crate::models::staff::Staff;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Staff
// ---------------------------------------------------------------------------

fn map_staff_row(row: &Row) -> Result<Staff> {
    Ok(Staff {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        active: row.get::<_, i32>("active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_staff(conn: &Connection, staff: &Staff) -> AppResult<()> {
    conn.execute(
        "INSERT INTO staff (id, name, role, active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            staff.id,
            staff.name,
            staff.role,
            if staff.active { 1 } else { 0 },
            staff.created_at,
        ],
    )?;
    Ok(())
}

pub fn find_staff(conn: &Connection, id: &str) -> AppResult<Option<Staff>> {
    let staff = conn
        .query_row("SELECT * FROM staff WHERE id = ?1", [id], map_staff_row)
        .optional()?;
    Ok(staff)
}

pub fn load_staff(pool: &mut DbPool, include_inactive: bool) -> AppResult<Vec<Staff>> {
    let sql = if include_inactive {
        "SELECT * FROM staff ORDER BY name ASC, id ASC"
    } else {
        "SELECT * FROM staff WHERE active = 1 ORDER BY name ASC, id ASC"
    };

    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map([], map_staff_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_staff_active(conn: &Connection, id: &str, active: bool) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE staff SET active = ?1 WHERE id = ?2",
        params![if active { 1 } else { 0 }, id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Punches
// ---------------------------------------------------------------------------

/// Map a `punches` row to the canonical event shape.
///
/// NULL text columns become empty strings instead of failing the load.
pub fn map_punch_row(row: &Row) -> Result<PunchEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(ts_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPunchType(kind_str.clone())),
        )
    })?;

    let text = |col: &str| -> Result<String> {
        Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
    };

    Ok(PunchEvent {
        id: row.get("id")?,
        staff_id: text("staff_id")?,
        staff_name: text("staff_name")?,
        kind,
        timestamp,
        reason: text("reason")?,
        photo_ref: row.get("photo_ref")?,
        date_key: text("date_key")?,
        created_at: text("created_at")?,
    })
}

/// Insert a new punch and return its id.
pub fn insert_punch(conn: &Connection, ev: &PunchEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (staff_id, staff_name, kind, timestamp, reason, photo_ref, date_key, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ev.staff_id,
            ev.staff_name,
            ev.kind.to_db_str(),
            ev.timestamp_str(),
            ev.reason,
            ev.photo_ref,
            ev.date_key,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn collect_punches(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Punches of one day, in insertion order.
pub fn load_punches_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<PunchEvent>> {
    let key = date_key_for(*date);
    collect_punches(
        conn,
        "SELECT * FROM punches WHERE date_key = ?1 ORDER BY id ASC",
        params![key],
    )
}

/// Punches with `date_key` inside the inclusive bounds (or all punches when
/// `bounds` is `None`), optionally restricted to one staff member.
/// Rows come back in insertion order.
pub fn load_punches(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
    staff_id: Option<&str>,
) -> AppResult<Vec<PunchEvent>> {
    let mut sql = String::from("SELECT * FROM punches WHERE 1 = 1");
    let mut values: Vec<String> = Vec::new();

    if let Some((from, to)) = bounds {
        sql.push_str(&format!(
            " AND date_key BETWEEN ?{} AND ?{}",
            values.len() + 1,
            values.len() + 2
        ));
        values.push(date_key_for(from));
        values.push(date_key_for(to));
    }

    if let Some(id) = staff_id {
        sql.push_str(&format!(" AND staff_id = ?{}", values.len() + 1));
        values.push(id.to_string());
    }

    sql.push_str(" ORDER BY id ASC");

    let params: Vec<&dyn rusqlite::ToSql> =
        values.iter().map(|v| v as &dyn rusqlite::ToSql).collect();
    collect_punches(conn, &sql, &params)
}

// ---------------------------------------------------------------------------
// Floor tables
// ---------------------------------------------------------------------------

pub fn insert_table(conn: &Connection, name: &str, seats: u32) -> AppResult<()> {
    conn.execute(
        "INSERT INTO floor_tables (name, seats, created_at) VALUES (?1, ?2, ?3)",
        params![name, seats, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn load_tables(pool: &mut DbPool) -> AppResult<Vec<FloorTable>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name, seats, created_at FROM floor_tables ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(FloorTable {
            id: row.get(0)?,
            name: row.get(1)?,
            seats: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_table(conn: &Connection, name: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM floor_tables WHERE name = ?1", [name])?;
    Ok(n)
}

pub fn find_table_by_name(conn: &Connection, name: &str) -> AppResult<Option<FloorTable>> {
    let table = conn
        .query_row(
            "SELECT id, name, seats, created_at FROM floor_tables WHERE name = ?1",
            [name],
            |row| {
                Ok(FloorTable {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    seats: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

fn map_menu_row(row: &Row) -> Result<MenuItem> {
    Ok(MenuItem {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        full_price: row.get("full_price")?,
        half_price: row.get("half_price")?,
        available: row.get::<_, i32>("available")? == 1,
        external_id: row.get("external_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_menu_item(conn: &Connection, item: &NewMenuItem) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO menu_items (name, category, full_price, half_price, available, external_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            item.name,
            item.category,
            item.full_price,
            item.half_price,
            if item.available { 1 } else { 0 },
            item.external_id,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_menu_item(conn: &Connection, id: i64) -> AppResult<Option<MenuItem>> {
    let item = conn
        .query_row("SELECT * FROM menu_items WHERE id = ?1", [id], map_menu_row)
        .optional()?;
    Ok(item)
}

pub fn find_menu_item_by_name(conn: &Connection, name: &str) -> AppResult<Option<MenuItem>> {
    let item = conn
        .query_row(
            "SELECT * FROM menu_items WHERE name = ?1",
            [name],
            map_menu_row,
        )
        .optional()?;
    Ok(item)
}

/// Menu ordered by category then name.
pub fn load_menu_items(conn: &Connection, include_hidden: bool) -> AppResult<Vec<MenuItem>> {
    let sql = if include_hidden {
        "SELECT * FROM menu_items ORDER BY category COLLATE NOCASE, name COLLATE NOCASE"
    } else {
        "SELECT * FROM menu_items WHERE available = 1
         ORDER BY category COLLATE NOCASE, name COLLATE NOCASE"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_menu_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_menu_item(conn: &Connection, item: &MenuItem) -> AppResult<()> {
    conn.execute(
        "UPDATE menu_items
         SET name = ?1, category = ?2, full_price = ?3, half_price = ?4, available = ?5
         WHERE id = ?6",
        params![
            item.name,
            item.category,
            item.full_price,
            item.half_price,
            if item.available { 1 } else { 0 },
            item.id,
        ],
    )?;
    Ok(())
}

pub fn delete_menu_item(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM menu_items WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

fn conversion_error(what: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::Other(what)),
    )
}

fn map_order_line_row(row: &Row) -> Result<OrderLine> {
    let portion_str: String = row.get("portion")?;
    let portion = Portion::from_db_str(&portion_str)
        .ok_or_else(|| conversion_error(format!("Invalid portion: {}", portion_str)))?;

    Ok(OrderLine {
        id: row.get("id")?,
        order_id: row.get("order_id")?,
        item_id: row.get("item_id")?,
        item_name: row.get("item_name")?,
        portion,
        unit_price: row.get("unit_price")?,
        quantity: row.get("quantity")?,
    })
}

fn map_order_row(row: &Row) -> Result<Order> {
    let status_str: String = row.get("status")?;
    let status = OrderStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(format!("Invalid order status: {}", status_str)))?;

    Ok(Order {
        id: row.get("id")?,
        table_name: row.get("table_name")?,
        staff_id: row.get("staff_id")?,
        status,
        created_at: row.get("created_at")?,
        closed_at: row.get("closed_at")?,
        lines: Vec::new(),
    })
}

fn load_order_lines(conn: &Connection, order_id: i64) -> AppResult<Vec<OrderLine>> {
    let mut stmt = conn.prepare("SELECT * FROM order_lines WHERE order_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([order_id], map_order_line_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_order(conn: &Connection, table_name: &str, staff_id: Option<&str>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO orders (table_name, staff_id, status, created_at) VALUES (?1, ?2, 'open', ?3)",
        params![table_name, staff_id, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Order with its lines.
pub fn find_order(conn: &Connection, id: i64) -> AppResult<Option<Order>> {
    let order = conn
        .query_row("SELECT * FROM orders WHERE id = ?1", [id], map_order_row)
        .optional()?;

    match order {
        Some(mut o) => {
            o.lines = load_order_lines(conn, o.id)?;
            Ok(Some(o))
        }
        None => Ok(None),
    }
}

/// Orders (newest first) with their lines.
pub fn load_orders(conn: &Connection, open_only: bool) -> AppResult<Vec<Order>> {
    let sql = if open_only {
        "SELECT * FROM orders WHERE status = 'open' ORDER BY id DESC"
    } else {
        "SELECT * FROM orders ORDER BY id DESC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_order_row)?;

    let mut out = Vec::new();
    for r in rows {
        let mut o = r?;
        o.lines = load_order_lines(conn, o.id)?;
        out.push(o);
    }
    Ok(out)
}

pub fn insert_order_line(conn: &Connection, line: &OrderLine) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO order_lines (order_id, item_id, item_name, portion, unit_price, quantity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            line.order_id,
            line.item_id,
            line.item_name,
            line.portion.to_db_str(),
            line.unit_price,
            line.quantity,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_order_line_quantity(conn: &Connection, line_id: i64, quantity: u32) -> AppResult<()> {
    conn.execute(
        "UPDATE order_lines SET quantity = ?1 WHERE id = ?2",
        params![quantity, line_id],
    )?;
    Ok(())
}

pub fn delete_order_line(conn: &Connection, order_id: i64, line_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM order_lines WHERE id = ?1 AND order_id = ?2",
        params![line_id, order_id],
    )?;
    Ok(n)
}

pub fn close_order(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE orders SET status = 'closed', closed_at = ?1 WHERE id = ?2",
        params![Local::now().to_rfc3339(), id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------------------

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<LogRow>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
