//! Floor-plan tables: bulk name generation and natural ordering.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_table, insert_table, load_tables};
use crate::errors::{AppError, AppResult};
use crate::models::floor_table::FloorTable;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Upper bound on the number of tables one range may generate.
pub const MAX_TABLES_PER_BATCH: usize = 200;

/// Expand a range spec such as `"1-4, 7, 10-11"` into prefixed table names
/// (`T1 T2 T3 T4 T7 T10 T11` for prefix `T`).
///
/// Repeated numbers keep their first occurrence.
pub fn expand_table_range(prefix: &str, spec: &str) -> AppResult<Vec<String>> {
    let re = Regex::new(r"^(\d+)(?:\s*-\s*(\d+))?$").map_err(|e| AppError::Other(e.to_string()))?;

    if spec.trim().is_empty() {
        return Err(AppError::InvalidRange("empty range".into()));
    }

    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();
        let caps = re
            .captures(part)
            .ok_or_else(|| AppError::InvalidRange(format!("'{}' is not N or N-M", part)))?;

        let start = parse_number(&caps[1])?;
        let end = match caps.get(2) {
            Some(m) => parse_number(m.as_str())?,
            None => start,
        };

        if start > end {
            return Err(AppError::InvalidRange(format!(
                "'{}' goes backwards ({} > {})",
                part, start, end
            )));
        }

        for n in start..=end {
            if seen.insert(n) {
                names.push(format!("{}{}", prefix.trim(), n));
            }
            if names.len() > MAX_TABLES_PER_BATCH {
                return Err(AppError::InvalidRange(format!(
                    "more than {} tables in one batch",
                    MAX_TABLES_PER_BATCH
                )));
            }
        }
    }

    Ok(names)
}

fn parse_number(s: &str) -> AppResult<u64> {
    s.parse::<u64>()
        .map_err(|_| AppError::InvalidRange(format!("number out of range: {}", s)))
}

/// Keep only candidates not already present in `existing`.
/// Comparison ignores case and surrounding whitespace.
pub fn filter_new(candidates: Vec<String>, existing: &[String]) -> Vec<String> {
    let taken: HashSet<String> = existing.iter().map(|s| s.trim().to_lowercase()).collect();
    candidates
        .into_iter()
        .filter(|c| !taken.contains(&c.trim().to_lowercase()))
        .collect()
}

/// Natural ordering: digit runs compare by value, so `T2` < `T10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ca = chunks(a);
    let cb = chunks(b);

    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Num(nx), Chunk::Num(ny)) => {
                let tx = nx.trim_start_matches('0');
                let ty = ny.trim_start_matches('0');
                tx.len().cmp(&ty.len()).then_with(|| tx.cmp(ty))
            }
            (Chunk::Text(tx), Chunk::Text(ty)) => tx.to_lowercase().cmp(&ty.to_lowercase()),
            (Chunk::Num(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Num(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

enum Chunk<'a> {
    Num(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut digit_run: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match digit_run {
            Some(prev) if prev != is_digit => {
                out.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        digit_run = Some(is_digit);
    }
    if let Some(prev) = digit_run {
        out.push(make_chunk(&s[start..], prev));
    }
    out
}

fn make_chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits { Chunk::Num(s) } else { Chunk::Text(s) }
}

/// High-level logic for the `tables` command.
pub struct TableLogic;

impl TableLogic {
    /// Create every table named by `prefix` + `range` that does not exist yet.
    /// Returns the names actually created.
    pub fn generate(
        pool: &mut DbPool,
        prefix: &str,
        range: &str,
        seats: u32,
    ) -> AppResult<Vec<String>> {
        if seats == 0 {
            return Err(AppError::InvalidField {
                field: "seats",
                value: seats.to_string(),
            });
        }

        let candidates = expand_table_range(prefix, range)?;
        let existing: Vec<String> = load_tables(pool)?.into_iter().map(|t| t.name).collect();
        let fresh = filter_new(candidates, &existing);

        let tx = pool.conn.transaction()?;
        for name in &fresh {
            insert_table(&tx, name, seats)?;
        }
        if !fresh.is_empty() {
            ttlog(
                &tx,
                "table_add",
                &format!("{}{}", prefix, range),
                &format!("Created {} table(s): {}", fresh.len(), fresh.join(", ")),
            )?;
        }
        tx.commit()?;

        Ok(fresh)
    }

    /// All tables, naturally sorted by name.
    pub fn list(pool: &mut DbPool) -> AppResult<Vec<FloorTable>> {
        let mut tables = load_tables(pool)?;
        tables.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        Ok(tables)
    }

    pub fn remove(pool: &mut DbPool, name: &str) -> AppResult<()> {
        if delete_table(&pool.conn, name)? == 0 {
            return Err(AppError::TableNotFound(name.to_string()));
        }
        ttlog(&pool.conn, "table_del", name, &format!("Deleted table {}", name))?;
        Ok(())
    }
}
