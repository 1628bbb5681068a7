//! Menu catalog: price parsing, import normalization and CRUD.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_menu_item, find_menu_item, find_menu_item_by_name, insert_menu_item, load_menu_items,
    update_menu_item,
};
use crate::errors::{AppError, AppResult};
use crate::models::menu_item::{MenuItem, NewMenuItem, RawMenuItem};
use crate::utils::formatting::format_price;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Parse a user-entered price (`12`, `12.5`, `12,50`) into cents.
pub fn parse_price(s: &str) -> AppResult<i64> {
    let re = Regex::new(r"^(\d+)(?:[.,](\d{1,2}))?$").map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidPrice(s.to_string()))?;

    let units: i64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidPrice(s.to_string()))?;
    let cents = match caps.get(2) {
        Some(m) if m.as_str().len() == 1 => m.as_str().parse::<i64>().unwrap_or(0) * 10,
        Some(m) => m.as_str().parse::<i64>().unwrap_or(0),
        None => 0,
    };

    units
        .checked_mul(100)
        .and_then(|u| u.checked_add(cents))
        .ok_or_else(|| AppError::InvalidPrice(s.to_string()))
}

/// Decimal amount from an import file → cents.
fn amount_to_cents(value: f64) -> AppResult<i64> {
    if !value.is_finite() || value < 0.0 || value > (i64::MAX / 100) as f64 {
        return Err(AppError::InvalidPrice(value.to_string()));
    }
    Ok((value * 100.0).round() as i64)
}

/// Fold an imported record into the canonical shape.
///
/// `fullPrice` wins over the older single `price`; one of them must be
/// present. `_id`/`id` becomes `external_id`.
pub fn normalize_raw(raw: RawMenuItem) -> AppResult<NewMenuItem> {
    let name = raw.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::InvalidField {
            field: "menu item name",
            value: String::new(),
        });
    }

    let full = raw
        .full_price
        .or(raw.price)
        .ok_or_else(|| AppError::MissingPrice(name.to_string()))?;

    Ok(NewMenuItem {
        name: name.to_string(),
        category: raw.category.as_deref().map(str::trim).unwrap_or_default().to_string(),
        full_price: amount_to_cents(full)?,
        half_price: raw.half_price.map(amount_to_cents).transpose()?,
        available: raw.available.unwrap_or(true),
        external_id: raw.id.map(|id| id.into_string()),
    })
}

/// Parse a JSON array of menu records and normalize every entry.
pub fn parse_menu_json(content: &str) -> AppResult<Vec<NewMenuItem>> {
    let raw: Vec<RawMenuItem> = serde_json::from_str(content)
        .map_err(|e| AppError::Other(format!("Invalid menu file: {}", e)))?;
    raw.into_iter().map(normalize_raw).collect()
}

/// Field changes for `menu update`; `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct MenuUpdate<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub full_price: Option<&'a str>,
    pub half_price: Option<&'a str>,
    pub clear_half: bool,
    pub available: Option<bool>,
}

#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

pub struct MenuLogic;

impl MenuLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        category: Option<&str>,
        full_price: &str,
        half_price: Option<&str>,
    ) -> AppResult<MenuItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidField {
                field: "menu item name",
                value: name.to_string(),
            });
        }
        if find_menu_item_by_name(&pool.conn, name)?.is_some() {
            return Err(AppError::DuplicateMenuItem(name.to_string()));
        }

        let item = NewMenuItem {
            name: name.to_string(),
            category: category.map(str::trim).unwrap_or_default().to_string(),
            full_price: parse_price(full_price)?,
            half_price: half_price.map(parse_price).transpose()?,
            available: true,
            external_id: None,
        };

        let id = insert_menu_item(&pool.conn, &item)?;
        ttlog(
            &pool.conn,
            "menu_add",
            &id.to_string(),
            &format!("Added {} ({})", item.name, format_price(item.full_price)),
        )?;

        find_menu_item(&pool.conn, id)?.ok_or(AppError::MenuItemNotFound(id))
    }

    pub fn list(pool: &mut DbPool, include_hidden: bool) -> AppResult<Vec<MenuItem>> {
        load_menu_items(&pool.conn, include_hidden)
    }

    pub fn update(pool: &mut DbPool, id: i64, changes: &MenuUpdate) -> AppResult<MenuItem> {
        let mut item = find_menu_item(&pool.conn, id)?.ok_or(AppError::MenuItemNotFound(id))?;

        if let Some(name) = changes.name.map(str::trim) {
            if name.is_empty() {
                return Err(AppError::InvalidField {
                    field: "menu item name",
                    value: name.to_string(),
                });
            }
            if let Some(other) = find_menu_item_by_name(&pool.conn, name)?
                && other.id != id
            {
                return Err(AppError::DuplicateMenuItem(name.to_string()));
            }
            item.name = name.to_string();
        }
        if let Some(category) = changes.category {
            item.category = category.trim().to_string();
        }
        if let Some(full) = changes.full_price {
            item.full_price = parse_price(full)?;
        }
        if changes.clear_half {
            item.half_price = None;
        } else if let Some(half) = changes.half_price {
            item.half_price = Some(parse_price(half)?);
        }
        if let Some(available) = changes.available {
            item.available = available;
        }

        update_menu_item(&pool.conn, &item)?;
        ttlog(&pool.conn, "menu_update", &id.to_string(), &format!("Updated {}", item.name))?;

        Ok(item)
    }

    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if delete_menu_item(&pool.conn, id)? == 0 {
            return Err(AppError::MenuItemNotFound(id));
        }
        ttlog(&pool.conn, "menu_del", &id.to_string(), &format!("Deleted menu item {}", id))?;
        Ok(())
    }

    /// Import a JSON menu file. Items whose name already exists are skipped.
    pub fn import(pool: &mut DbPool, path: &Path) -> AppResult<ImportReport> {
        let content = fs::read_to_string(path)?;
        let items = parse_menu_json(&content)?;

        let mut report = ImportReport::default();
        let tx = pool.conn.transaction()?;
        for item in items {
            if find_menu_item_by_name(&tx, &item.name)?.is_some() {
                report.skipped.push(item.name);
                continue;
            }
            insert_menu_item(&tx, &item)?;
            report.added.push(item.name);
        }
        ttlog(
            &tx,
            "menu_import",
            &path.display().to_string(),
            &format!(
                "Imported {} item(s), skipped {}",
                report.added.len(),
                report.skipped.len()
            ),
        )?;
        tx.commit()?;

        Ok(report)
    }
}
