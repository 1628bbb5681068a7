//! Order-taking: lines priced by portion, order totals.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    close_order, delete_order_line, find_menu_item, find_order, find_staff, find_table_by_name,
    insert_order, insert_order_line, load_orders, set_order_line_quantity,
};
use crate::errors::{AppError, AppResult};
use crate::models::menu_item::{MenuItem, Portion};
use crate::models::order::{Order, OrderLine};
use crate::utils::formatting::format_price;
use rusqlite::Connection;

/// Price `quantity` × `portion` of `item` as a line of `order_id`.
///
/// The item must be available and offered in the requested portion.
pub fn price_line(
    order_id: i64,
    item: &MenuItem,
    portion: Portion,
    quantity: u32,
) -> AppResult<OrderLine> {
    if quantity == 0 {
        return Err(AppError::InvalidField {
            field: "quantity",
            value: quantity.to_string(),
        });
    }
    if !item.available {
        return Err(AppError::MenuItemUnavailable(item.name.clone()));
    }

    let unit_price = item
        .price_for(portion)
        .ok_or_else(|| AppError::PortionUnavailable {
            item: item.name.clone(),
            portion: portion.to_db_str(),
        })?;

    Ok(OrderLine {
        id: 0,
        order_id,
        item_id: item.id,
        item_name: item.name.clone(),
        portion,
        unit_price,
        quantity,
    })
}

fn load_open_order(conn: &Connection, id: i64) -> AppResult<Order> {
    let order = find_order(conn, id)?.ok_or(AppError::OrderNotFound(id))?;
    if !order.is_open() {
        return Err(AppError::OrderClosed(id));
    }
    Ok(order)
}

pub struct OrderLogic;

impl OrderLogic {
    pub fn open(pool: &mut DbPool, table_name: &str, staff_id: Option<&str>) -> AppResult<Order> {
        let table = find_table_by_name(&pool.conn, table_name.trim())?
            .ok_or_else(|| AppError::TableNotFound(table_name.to_string()))?;

        if let Some(sid) = staff_id
            && find_staff(&pool.conn, sid)?.is_none()
        {
            return Err(AppError::StaffNotFound(sid.to_string()));
        }

        let id = insert_order(&pool.conn, &table.name, staff_id)?;
        ttlog(&pool.conn, "order_open", &id.to_string(), &format!("Opened order for {}", table.name))?;

        find_order(&pool.conn, id)?.ok_or(AppError::OrderNotFound(id))
    }

    /// Add a line; a line with the same dish, portion and unit price is
    /// topped up instead of duplicated.
    pub fn add_line(
        pool: &mut DbPool,
        order_id: i64,
        item_id: i64,
        portion: Portion,
        quantity: u32,
    ) -> AppResult<Order> {
        let order = load_open_order(&pool.conn, order_id)?;
        let item = find_menu_item(&pool.conn, item_id)?.ok_or(AppError::MenuItemNotFound(item_id))?;
        let line = price_line(order_id, &item, portion, quantity)?;

        let tx = pool.conn.transaction()?;
        let existing = order.lines.iter().find(|l| {
            l.item_id == line.item_id && l.portion == line.portion && l.unit_price == line.unit_price
        });
        match existing {
            Some(l) => set_order_line_quantity(&tx, l.id, l.quantity + line.quantity)?,
            None => {
                insert_order_line(&tx, &line)?;
            }
        }
        ttlog(
            &tx,
            "order_add",
            &order_id.to_string(),
            &format!(
                "{} × {} ({}) @ {}",
                line.quantity,
                line.item_name,
                portion.to_db_str(),
                format_price(line.unit_price)
            ),
        )?;
        tx.commit()?;

        find_order(&pool.conn, order_id)?.ok_or(AppError::OrderNotFound(order_id))
    }

    pub fn remove_line(pool: &mut DbPool, order_id: i64, line_id: i64) -> AppResult<Order> {
        load_open_order(&pool.conn, order_id)?;
        if delete_order_line(&pool.conn, order_id, line_id)? == 0 {
            return Err(AppError::OrderLineNotFound(line_id));
        }
        ttlog(&pool.conn, "order_remove", &order_id.to_string(), &format!("Removed line {}", line_id))?;

        find_order(&pool.conn, order_id)?.ok_or(AppError::OrderNotFound(order_id))
    }

    pub fn close(pool: &mut DbPool, order_id: i64) -> AppResult<Order> {
        let order = load_open_order(&pool.conn, order_id)?;
        close_order(&pool.conn, order_id)?;
        ttlog(
            &pool.conn,
            "order_close",
            &order_id.to_string(),
            &format!("Closed {} for {}", order.table_name, format_price(order.total())),
        )?;

        find_order(&pool.conn, order_id)?.ok_or(AppError::OrderNotFound(order_id))
    }

    pub fn show(pool: &mut DbPool, order_id: i64) -> AppResult<Order> {
        find_order(&pool.conn, order_id)?.ok_or(AppError::OrderNotFound(order_id))
    }

    pub fn list(pool: &mut DbPool, include_closed: bool) -> AppResult<Vec<Order>> {
        load_orders(&pool.conn, !include_closed)
    }
}
