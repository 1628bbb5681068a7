use crate::cli::parser::{Commands, OrderAction};
use crate::config::Config;
use crate::core::orders::OrderLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::order::Order;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_price;
use crate::utils::table::Table;

fn print_order(order: &Order, sep: &str) {
    println!(
        "Order #{} | {} | {}{}",
        order.id,
        order.table_name,
        order.status.to_db_str(),
        order
            .staff_id
            .as_deref()
            .map(|s| format!(" | staff {}", s))
            .unwrap_or_default()
    );

    if order.lines.is_empty() {
        info("No lines yet.");
    } else {
        let mut table = Table::new(&["LINE", "DISH", "PORTION", "QTY", "UNIT", "AMOUNT"], sep);
        for l in &order.lines {
            table.add_row(vec![
                l.id.to_string(),
                l.item_name.clone(),
                l.portion.to_db_str().to_string(),
                l.quantity.to_string(),
                format_price(l.unit_price),
                format_price(l.line_total()),
            ]);
        }
        print!("{}", table.render());
    }

    println!("Total: {}", format_price(order.total()));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Order { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match action {
            OrderAction::Open { table, staff } => {
                let order = OrderLogic::open(&mut pool, table, staff.as_deref())?;
                success(format!("Order #{} opened for {}.", order.id, order.table_name));
            }
            OrderAction::Add {
                order,
                item,
                portion,
                qty,
            } => {
                let order = OrderLogic::add_line(&mut pool, *order, *item, *portion, *qty)?;
                success(format!(
                    "Order #{} updated. Total: {}",
                    order.id,
                    format_price(order.total())
                ));
            }
            OrderAction::Remove { order, line } => {
                let order = OrderLogic::remove_line(&mut pool, *order, *line)?;
                success(format!(
                    "Line {} removed. Total: {}",
                    line,
                    format_price(order.total())
                ));
            }
            OrderAction::Close { order } => {
                let order = OrderLogic::close(&mut pool, *order)?;
                success(format!(
                    "Order #{} closed. Total: {}",
                    order.id,
                    format_price(order.total())
                ));
            }
            OrderAction::Show { order } => {
                let order = OrderLogic::show(&mut pool, *order)?;
                print_order(&order, &cfg.separator_char);
            }
            OrderAction::List { all } => {
                let orders = OrderLogic::list(&mut pool, *all)?;
                if orders.is_empty() {
                    info("No orders.");
                    return Ok(());
                }

                let mut table = Table::new(
                    &["ID", "TABLE", "STAFF", "STATUS", "LINES", "TOTAL", "OPENED"],
                    &cfg.separator_char,
                );
                for o in &orders {
                    table.add_row(vec![
                        o.id.to_string(),
                        o.table_name.clone(),
                        o.staff_id.clone().unwrap_or_default(),
                        o.status.to_db_str().to_string(),
                        o.lines.len().to_string(),
                        format_price(o.total()),
                        o.created_at.clone(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
