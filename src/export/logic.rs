// src/export/logic.rs

use crate::core::aggregator::{compute_daily_summaries, sort_for_report};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_punches;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{PunchExport, SummaryExport};
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::{expand_tilde, is_absolute};
use serde::Serialize;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export daily summaries (default) or raw punch events (`events`).
    ///
    /// `range` accepts the same expressions as `summary --period`; `None`
    /// or `"all"` exports everything.
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        events: bool,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let bounds = resolve_period(range, None)?;
        let punches = load_punches(&pool.conn, bounds, None)?;

        if punches.is_empty() {
            warning("No punches found for the selected range.");
            return Ok(0);
        }

        let (kind, rows) = if events {
            let rows: Vec<PunchExport> = punches.iter().map(PunchExport::from).collect();
            write_rows(format, &rows, &path)?;
            ("events", rows.len())
        } else {
            let mut summaries = compute_daily_summaries(&punches);
            sort_for_report(&mut summaries);
            let rows: Vec<SummaryExport> = summaries.iter().map(SummaryExport::from).collect();
            write_rows(format, &rows, &path)?;
            ("summary", rows.len())
        };

        ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} {} row(s) to {}", rows, kind, path.display()),
        )?;

        Ok(rows)
    }
}

fn write_rows<T: Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
