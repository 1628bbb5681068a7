use crate::config::Config;
use crate::core::aggregator::compute_current_status;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_staff, insert_punch, load_punches_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::punch_event::PunchEvent;
use crate::models::punch_type::PunchType;
use chrono::{Local, NaiveDateTime, Timelike};

/// Parameters of a single punch action.
#[derive(Debug, Default)]
pub struct PunchRequest<'a> {
    pub staff_id: &'a str,
    /// `None` toggles from the staff member's current status.
    pub kind: Option<PunchType>,
    pub reason: Option<&'a str>,
    pub photo_ref: Option<&'a str>,
    /// `None` means now.
    pub at: Option<NaiveDateTime>,
}

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, req: &PunchRequest) -> AppResult<PunchEvent> {
        let staff = find_staff(&pool.conn, req.staff_id)?
            .ok_or_else(|| AppError::StaffNotFound(req.staff_id.to_string()))?;
        if !staff.active {
            return Err(AppError::StaffInactive(staff.id));
        }

        let timestamp = match req.at {
            Some(ts) => ts,
            None => now_to_second(),
        };

        let kind = match req.kind {
            Some(k) => k,
            None => {
                let day = load_punches_by_date(&pool.conn, &timestamp.date())?;
                compute_current_status(&day, &staff.id).next_punch()
            }
        };

        let reason = resolve_reason(kind, req.reason, &cfg.default_in_reason)?;
        let photo_ref = req
            .photo_ref
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let mut ev = PunchEvent::new(&staff.id, &staff.name, kind, timestamp, &reason, photo_ref);

        let tx = pool.conn.transaction()?;
        ev.id = insert_punch(&tx, &ev)?;
        ttlog(
            &tx,
            &format!("punch_{}", kind.to_db_str()),
            &staff.id,
            &format!("{} {} at {} ({})", staff.name, kind.label(), ev.timestamp_str(), reason),
        )?;
        tx.commit()?;

        Ok(ev)
    }
}

/// `out` needs a reason; `in` falls back to the configured label.
pub fn resolve_reason(kind: PunchType, given: Option<&str>, default_in: &str) -> AppResult<String> {
    let given = given.map(str::trim).filter(|r| !r.is_empty());
    match (kind, given) {
        (_, Some(r)) => Ok(r.to_string()),
        (PunchType::In, None) => Ok(default_in.to_string()),
        (PunchType::Out, None) => Err(AppError::MissingReason),
    }
}

fn now_to_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
