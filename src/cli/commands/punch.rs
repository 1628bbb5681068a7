use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        staff,
        punch_in,
        punch_out,
        reason,
        photo,
        at,
    } = cmd
    {
        let at = parse_optional_datetime(at.as_ref())?;

        let kind = if *punch_in {
            Some(PunchType::In)
        } else if *punch_out {
            Some(PunchType::Out)
        } else {
            None
        };

        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let ev = PunchLogic::apply(
            &mut pool,
            cfg,
            &PunchRequest {
                staff_id: staff,
                kind,
                reason: reason.as_deref(),
                photo_ref: photo.as_deref(),
                at,
            },
        )?;

        let icon = if ev.kind.is_in() { "🟢" } else { "🔴" };
        success(format!(
            "{} {} → {} at {} ({})",
            icon,
            ev.staff_name,
            ev.kind.label(),
            ev.timestamp_str(),
            ev.reason
        ));
    }

    Ok(())
}
