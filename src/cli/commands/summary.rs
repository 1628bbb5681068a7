use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::{compute_daily_summaries, sort_for_report};
use crate::db::pool::DbPool;
use crate::db::queries::load_punches;
use crate::errors::AppResult;
use crate::models::daily_summary::seconds_to_hours;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{current_month_bounds, resolve_period};
use crate::utils::formatting::{format_hours, secs2readable};
use crate::utils::table::Table;
use crate::utils::time::format_opt_time;
use std::collections::BTreeSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, staff } = cmd {
        let bounds = resolve_period(period.as_deref(), Some(current_month_bounds()?))?;

        let pool = DbPool::open_initialized(&cfg.database)?;
        let punches = load_punches(&pool.conn, bounds, staff.as_deref())?;

        if punches.is_empty() {
            info("No punches for the selected period.");
            return Ok(());
        }

        let mut summaries = compute_daily_summaries(&punches);
        sort_for_report(&mut summaries);

        match bounds {
            Some((from, to)) => header(format!("Attendance {} → {}", from, to)),
            None => header("Attendance (all)"),
        }

        let mut table = Table::new(
            &["DATE", "ID", "NAME", "FIRST IN", "LAST OUT", "HOURS", "ACTIVE"],
            &cfg.separator_char,
        );

        let mut total_secs = 0;
        for s in &summaries {
            total_secs += s.active_seconds;
            table.add_row(vec![
                s.date_key.clone(),
                s.staff_id.clone(),
                s.staff_name.clone(),
                colorize_optional(&format_opt_time(s.first_in)),
                colorize_optional(&format_opt_time(s.last_out)),
                format_hours(s.active_hours()),
                colorize_optional(&secs2readable(s.active_seconds, false)),
            ]);
        }

        let days: BTreeSet<&str> = summaries.iter().map(|s| s.date_key.as_str()).collect();

        print!("{}", table.render());
        println!(
            "\nDays: {} | Staff-days: {} | Total active: {} h ({})",
            days.len(),
            summaries.len(),
            format_hours(seconds_to_hours(total_secs)),
            secs2readable(total_secs, false)
        );
    }

    Ok(())
}
