use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::compute_current_statuses;
use crate::db::pool::DbPool;
use crate::db::queries::{load_punches_by_date, load_staff};
use crate::errors::{AppError, AppResult};
use crate::models::current_status::CurrentStatus;
use crate::models::punch_event::date_key_for;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize, colorize_optional, color_for_state};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date: date_arg } = cmd {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let staff = load_staff(&mut pool, false)?;
        let punches = load_punches_by_date(&pool.conn, &day)?;
        let mut statuses = compute_current_statuses(&punches, &date_key_for(day));

        if staff.is_empty() && statuses.is_empty() {
            info("No staff members registered.");
            return Ok(());
        }

        header(format!("Status for {}", day));

        let mut table = Table::new(
            &["ID", "NAME", "STATUS", "LAST", "REASON", "ACTION"],
            &cfg.separator_char,
        );

        for s in staff {
            let status = statuses.remove(&s.id).unwrap_or_else(CurrentStatus::none);
            table.add_row(status_row(&s.id, &s.name, &status));
        }

        // punches from staff no longer active (or unknown ids)
        for (id, status) in statuses {
            let name = status
                .last_event
                .as_ref()
                .map(|ev| ev.staff_name.clone())
                .unwrap_or_default();
            table.add_row(status_row(&id, &name, &status));
        }

        print!("{}", table.render());
    }

    Ok(())
}

fn status_row(id: &str, name: &str, status: &CurrentStatus) -> Vec<String> {
    let (last, reason) = match &status.last_event {
        Some(ev) => (ev.time_str(), ev.reason.clone()),
        None => ("--:--".to_string(), String::new()),
    };

    vec![
        id.to_string(),
        name.to_string(),
        colorize(status.state.as_str(), color_for_state(status.state)),
        colorize_optional(&last),
        reason,
        status.next_punch().label().to_string(),
    ]
}
