use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_punches;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RED, colorize};
use crate::utils::date::{resolve_period, today};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { period, staff } = cmd {
        let t = today();
        let bounds = resolve_period(period.as_deref(), Some((t, t)))?;

        let pool = DbPool::open_initialized(&cfg.database)?;
        let punches = load_punches(&pool.conn, bounds, staff.as_deref())?;

        if punches.is_empty() {
            info("No punches for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(
            &["#", "DATE", "TIME", "ID", "NAME", "TYPE", "REASON", "PHOTO"],
            &cfg.separator_char,
        );

        for ev in punches {
            let kind = if ev.kind.is_in() {
                colorize(ev.kind.to_db_str(), GREEN)
            } else {
                colorize(ev.kind.to_db_str(), RED)
            };
            table.add_row(vec![
                ev.id.to_string(),
                ev.date_key.clone(),
                ev.timestamp.format("%H:%M:%S").to_string(),
                ev.staff_id,
                ev.staff_name,
                kind,
                ev.reason,
                ev.photo_ref.unwrap_or_default(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
